//! Tool: edit_document. Replaces every exact occurrence of a substring.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};
use crate::SharedStore;

#[derive(Debug, Deserialize)]
struct EditParams {
    doc_id: String,
    old_str: String,
    new_str: String,
}

/// Return the tool definition for edit_document.
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "edit_document".to_string(),
        description: Some(
            "edit a document by replacing a string in the documents content with a new string"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "doc_id": {
                    "type": "string",
                    "description": "Id of the document that will be edited"
                },
                "old_str": {
                    "type": "string",
                    "description": "The text to replace. Must match exactly, including whitespace"
                },
                "new_str": {
                    "type": "string",
                    "description": "The new text to insert in place of the old text"
                }
            },
            "required": ["doc_id", "old_str", "new_str"]
        }),
    }
}

/// Execute the edit_document tool.
///
/// Every occurrence is replaced. Zero matches still succeeds, and the
/// result carries no content either way.
pub async fn execute(args: Value, store: &SharedStore) -> McpResult<ToolCallResult> {
    let params: EditParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let mut store = store.lock().await;
    let replaced = store.replace(&params.doc_id, &params.old_str, &params.new_str)?;

    tracing::debug!(doc_id = %params.doc_id, replaced, "edit_document applied");
    Ok(ToolCallResult::empty())
}
