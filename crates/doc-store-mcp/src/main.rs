//! `doc-store-mcp` command line.

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use doc_store_mcp::config::{load_config, ServerConfig};
use doc_store_mcp::prompts::PromptRegistry;
use doc_store_mcp::protocol::ProtocolHandler;
use doc_store_mcp::resources::ResourceRegistry;
use doc_store_mcp::tools::ToolRegistry;
use doc_store_mcp::transport::StdioTransport;
use doc_store_mcp::types::InitializeResult;

#[derive(Parser)]
#[command(
    name = "doc-store-mcp",
    about = "Serve an in-memory document table to MCP clients",
    version
)]
struct Cli {
    /// TOML config file. Falls back to $DOC_STORE_MCP_CONFIG.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log filter, e.g. `debug` or `doc_store_mcp=trace`. RUST_LOG wins.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak MCP on stdin/stdout (default).
    Serve,

    /// Speak MCP over HTTP POST /mcp.
    #[cfg(feature = "sse")]
    ServeHttp {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },

    /// Load the config and list the documents it would serve.
    Validate,

    /// Dump server identity, capabilities, and registered names as JSON.
    Info,
}

fn init_logging(cli: &Cli, config: &ServerConfig) {
    let fallback = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // stdout is the protocol channel.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handler(config: &ServerConfig) -> anyhow::Result<ProtocolHandler> {
    Ok(ProtocolHandler::new(doc_store_mcp::share(config.build_store()?)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&cli, &config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => StdioTransport::new(handler(&config)?).run().await?,

        #[cfg(feature = "sse")]
        Commands::ServeHttp { addr } => {
            doc_store_mcp::transport::SseTransport::new(handler(&config)?)
                .run(&addr)
                .await?
        }

        Commands::Validate => {
            let store = config.build_store()?;
            println!("ok: {} documents", store.len());
            for doc in store.documents() {
                println!("  {:<24} {} bytes", doc.id, doc.content.len());
            }
        }

        Commands::Info => {
            let init = InitializeResult::default_result();
            let names = |it: Vec<String>| json!(it);
            let info = json!({
                "server": init.server_info,
                "protocolVersion": init.protocol_version,
                "capabilities": init.capabilities,
                "tools": names(ToolRegistry::list_tools().into_iter().map(|t| t.name).collect()),
                "prompts": names(PromptRegistry::list_prompts().into_iter().map(|p| p.name).collect()),
                "resources": names(ResourceRegistry::list_resources().into_iter().map(|r| r.uri).collect()),
                "resourceTemplates": names(
                    ResourceRegistry::list_templates().into_iter().map(|t| t.uri_template).collect()
                ),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
