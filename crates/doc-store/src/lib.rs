//! In-memory document store.
//!
//! A process-local table mapping document ids to text. Documents are seeded
//! once, edited by exact-substring replacement, and rendered into prompt
//! message sequences. No document is ever created or removed after seeding.

pub mod document;
pub mod error;
pub mod seed;
pub mod store;
pub mod template;

pub use document::{Document, Message, Role};
pub use error::{StoreError, StoreResult};
pub use seed::DEFAULT_DOCUMENTS;
pub use store::DocumentStore;
pub use template::TemplateKind;
