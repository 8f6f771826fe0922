//! Document-store port
//!
//! The persistence engine is treated as an opaque collection of JSON
//! documents keyed by storage-assigned string ids. Only the operations the
//! invoicing core needs are part of the port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// A stored document: its storage-assigned id plus the JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// The storage collaborator.
///
/// Each call is an independent request/response unit with no ordering
/// guarantee across concurrent writers; last write wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a new document and returns its assigned id
    async fn insert(&self, data: Value) -> Result<String, StoreError>;

    /// Replaces the body of an existing document
    async fn update(&self, id: &str, data: Value) -> Result<(), StoreError>;

    /// Removes a document. Removing an absent document is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Fetches one document by id
    async fn get(&self, id: &str) -> Result<Document, StoreError>;

    /// Returns every document in the collection, in no particular order
    async fn list(&self) -> Result<Vec<Document>, StoreError>;
}
