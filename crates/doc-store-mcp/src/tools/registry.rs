//! Tool registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};
use crate::SharedStore;

use super::{edit_document, get_all_ids, read_doc_contents};

/// Registry of all available MCP tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// List all available tool definitions.
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            read_doc_contents::definition(),
            edit_document::definition(),
            get_all_ids::definition(),
        ]
    }

    /// Call a tool by name, dispatching to the appropriate handler.
    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        store: &SharedStore,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "read_doc_contents" => read_doc_contents::execute(args, store).await,
            "edit_document" => edit_document::execute(args, store).await,
            "get_all_ids" => get_all_ids::execute(args, store).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}
