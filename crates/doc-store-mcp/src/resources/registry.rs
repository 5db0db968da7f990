//! Resource registration and dispatch for MCP resources.

use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};
use crate::SharedStore;

use super::templates::{DOCUMENT_URI_PREFIX, INDEX_URI};
use super::{document, index, templates};

/// Registry of all available MCP resources.
pub struct ResourceRegistry;

impl ResourceRegistry {
    /// List all resource URI templates.
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        templates::list_templates()
    }

    /// List all concrete (non-templated) resources.
    pub fn list_resources() -> Vec<ResourceDefinition> {
        templates::list_resources()
    }

    /// Read a resource by URI, dispatching to the appropriate handler.
    ///
    /// Everything after the `resource://docs/` prefix is percent-decoded and
    /// taken as the document id, so an unknown id surfaces as a
    /// document-not-found error.
    pub async fn read(uri: &str, store: &SharedStore) -> McpResult<ReadResourceResult> {
        if let Some(segment) = uri.strip_prefix(DOCUMENT_URI_PREFIX) {
            let doc_id = templates::decode_doc_id(segment);
            document::read_document(uri, &doc_id, store).await
        } else if uri == INDEX_URI {
            index::read_index(store).await
        } else {
            Err(McpError::ResourceNotFound(uri.to_string()))
        }
    }
}
