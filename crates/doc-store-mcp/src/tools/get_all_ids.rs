//! Tool: get_all_ids

use serde_json::{json, Value};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};
use crate::SharedStore;

/// Return the tool definition for get_all_ids.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_all_ids".to_string(),
        description: Some("returns a list of all document ids".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Execute the get_all_ids tool. Ids come back as a sorted JSON array.
pub async fn execute(_args: Value, store: &SharedStore) -> McpResult<ToolCallResult> {
    let store = store.lock().await;
    Ok(ToolCallResult::json(&store.list_ids()))
}
