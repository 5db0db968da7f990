//! DocumentMCP server: MCP access to an in-memory document store.
//!
//! This library implements an MCP (Model Context Protocol) server that exposes
//! a [`doc_store::DocumentStore`] as tools, resources, and prompt templates.

use std::sync::Arc;
use tokio::sync::Mutex;

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;

/// The process-wide document store, owned by the protocol handler.
pub type SharedStore = Arc<Mutex<doc_store::DocumentStore>>;

/// Wrap a store for handing to the protocol handler.
pub fn share(store: doc_store::DocumentStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}
