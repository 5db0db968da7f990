//! Tool: read_doc_contents

use serde_json::{json, Value};

use crate::types::{DocIdArgs, McpError, McpResult, ToolCallResult, ToolDefinition};
use crate::SharedStore;

/// Return the tool definition for read_doc_contents.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "read_doc_contents".to_string(),
        description: Some(
            "Reads the contents of a document and returns it as a string".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "doc_id": { "type": "string", "description": "The ID of the document to read." }
            },
            "required": ["doc_id"]
        }),
    }
}

/// Execute the read_doc_contents tool.
pub async fn execute(args: Value, store: &SharedStore) -> McpResult<ToolCallResult> {
    let params: DocIdArgs =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let store = store.lock().await;
    let content = store.get(&params.doc_id)?;

    Ok(ToolCallResult::text(content.to_string()))
}
