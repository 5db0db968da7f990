//! Read-only resource views of the document store.

pub mod document;
pub mod index;
pub mod registry;
pub mod templates;

pub use registry::ResourceRegistry;
