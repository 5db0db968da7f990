//! `resource://docs/{doc_id}`: one document as plain text.

use crate::types::{McpResult, ReadResourceResult, ResourceContent, TEXT_PLAIN};
use crate::SharedStore;

/// Read a single document resource by id. The reply echoes the requested `uri`.
pub async fn read_document(
    uri: &str,
    doc_id: &str,
    store: &SharedStore,
) -> McpResult<ReadResourceResult> {
    let store = store.lock().await;
    let content = store.get(doc_id)?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent::text(uri, TEXT_PLAIN, content.to_string())],
    })
}
