//! MCP tools: list, read, and edit documents.

pub mod edit_document;
pub mod get_all_ids;
pub mod read_doc_contents;
pub mod registry;

pub use registry::ToolRegistry;
