//! Storage errors

use thiserror::Error;

/// Errors from the document store and the invoice repository
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document with the given id
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Document body could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A storage-assigned id that is not a valid invoice id
    #[error("Invalid document id: {0}")]
    InvalidId(String),
}
