//! `resource://docs`: the sorted id listing.

use crate::types::{McpResult, ReadResourceResult, ResourceContent, APPLICATION_JSON};
use crate::SharedStore;

use super::templates::INDEX_URI;

/// Read the document id listing as a JSON array.
pub async fn read_index(store: &SharedStore) -> McpResult<ReadResourceResult> {
    let store = store.lock().await;
    let text = serde_json::to_string_pretty(&store.list_ids())?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent::text(INDEX_URI, APPLICATION_JSON, text)],
    })
}
