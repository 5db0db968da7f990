//! Drives a `doc-store-mcp` child process over stdio: list, edit, read back
//! through the resource URI, expand a prompt, and hit a missing document.
//!
//! Run with `cargo run --example custom_client` after building the binary.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use anyhow::{anyhow, bail, Context};
use serde_json::{json, Value};

struct Session {
    child: Child,
    input: ChildStdin,
    output: BufReader<ChildStdout>,
    last_id: i64,
}

impl Session {
    fn spawn(binary: &PathBuf) -> anyhow::Result<Self> {
        let mut child = Command::new(binary)
            .arg("serve")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("spawning {}", binary.display()))?;
        let input = child.stdin.take().ok_or_else(|| anyhow!("no stdin pipe"))?;
        let output = child.stdout.take().ok_or_else(|| anyhow!("no stdout pipe"))?;
        Ok(Self {
            child,
            input,
            output: BufReader::new(output),
            last_id: 0,
        })
    }

    fn write(&mut self, message: &Value) -> anyhow::Result<()> {
        writeln!(self.input, "{message}")?;
        self.input.flush()?;
        Ok(())
    }

    /// Send a request and return its `result`, failing on a JSON-RPC error.
    fn call(&mut self, method: &str, params: Value) -> anyhow::Result<Value> {
        self.last_id += 1;
        let id = self.last_id;
        self.write(&json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params}))?;

        let mut line = String::new();
        if self.output.read_line(&mut line)? == 0 {
            bail!("server closed stdout");
        }
        let mut reply: Value = serde_json::from_str(&line)?;
        if let Some(error) = reply.get("error") {
            bail!("{method} failed: {error}");
        }
        Ok(reply["result"].take())
    }

    fn tool(&mut self, name: &str, arguments: Value) -> anyhow::Result<Value> {
        self.call("tools/call", json!({"name": name, "arguments": arguments}))
    }

    fn close(mut self) -> anyhow::Result<()> {
        drop(self.input);
        self.child.wait()?;
        Ok(())
    }
}

fn first_text(result: &Value) -> &str {
    result["content"][0]["text"].as_str().unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let binary = std::env::current_dir()?.join("target/debug/doc-store-mcp");
    if !binary.exists() {
        bail!("{} not found; build the workspace first", binary.display());
    }
    let mut session = Session::spawn(&binary)?;

    let init = session.call(
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {"name": "custom-client", "version": "0.1.0"}
        }),
    )?;
    println!("connected to {} {}", init["serverInfo"]["name"], init["serverInfo"]["version"]);
    session.write(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))?;

    let ids: Vec<String> = serde_json::from_str(first_text(&session.tool("get_all_ids", json!({}))?))?;
    println!("documents: {}", ids.join(", "));

    session.tool(
        "edit_document",
        json!({"doc_id": "report.pdf", "old_str": "20m", "new_str": "25m"}),
    )?;
    let read = session.call("resources/read", json!({"uri": "resource://docs/report.pdf"}))?;
    println!("report.pdf after edit: {}", read["contents"][0]["text"]);

    let prompt = session.call(
        "prompts/get",
        json!({"name": "summarize_doc", "arguments": {"doc_id": "report.pdf"}}),
    )?;
    if let Some(messages) = prompt["messages"].as_array() {
        for message in messages {
            println!("[{}] {}", message["role"], message["content"]["text"]);
        }
    }

    let missing = session.tool("read_doc_contents", json!({"doc_id": "missing.md"}))?;
    println!("missing.md -> isError={} {}", missing["isError"], first_text(&missing));

    session.close()
}
