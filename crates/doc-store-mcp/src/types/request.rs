//! MCP request parameter types for tools, resources, and prompts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for tools/call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallParams {
    /// Tool name.
    pub name: String,
    /// Tool arguments.
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Parameters for resources/read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceReadParams {
    /// Resource URI.
    pub uri: String,
}

/// Parameters for prompts/get.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptGetParams {
    /// Prompt name.
    pub name: String,
    /// Prompt arguments. MCP sends these as a string map.
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Cursor-based pagination for list operations.
///
/// Every list fits in one page, so the cursor is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Arguments shared by every operation that targets one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocIdArgs {
    /// The ID of the document.
    pub doc_id: String,
}
