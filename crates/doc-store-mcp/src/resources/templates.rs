//! Resource URI template definitions.

use crate::types::{ResourceDefinition, ResourceTemplateDefinition, APPLICATION_JSON, TEXT_PLAIN};

/// Prefix of per-document resource URIs; the document id follows it.
pub const DOCUMENT_URI_PREFIX: &str = "resource://docs/";

/// URI of the document listing.
pub const INDEX_URI: &str = "resource://docs";

/// Recover a document id from the path segment after [`DOCUMENT_URI_PREFIX`].
///
/// Clients expand `{doc_id}` with RFC 6570 simple expansion, which
/// percent-encodes reserved characters. Malformed escapes are kept verbatim.
pub fn decode_doc_id(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escape = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escape {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => {
                decoded.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).unwrap_or_else(|_| segment.to_string())
}

/// Return all resource URI templates (parameterized).
pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
    vec![ResourceTemplateDefinition {
        uri_template: format!("{DOCUMENT_URI_PREFIX}{{doc_id}}"),
        name: "Document Contents".to_string(),
        description: Some("Returns the contents of a document by ID.".to_string()),
        mime_type: Some(TEXT_PLAIN.to_string()),
    }]
}

/// Return all concrete (non-templated) resource definitions.
pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![ResourceDefinition {
        uri: INDEX_URI.to_string(),
        name: "Document Index".to_string(),
        description: Some("Sorted list of all document IDs".to_string()),
        mime_type: Some(APPLICATION_JSON.to_string()),
    }]
}
