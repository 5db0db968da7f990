//! Error types for store operations.

/// Errors raised by [`crate::DocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced document id is not in the store.
    #[error("Document with ID '{0}' not found.")]
    NotFound(String),
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
