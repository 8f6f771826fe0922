//! In-memory document store
//!
//! A `HashMap` behind an async `RwLock`, with UUID ids. Used directly in
//! tests and as the reference implementation of the port's semantics.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{Document, DocumentStore};
use crate::error::StoreError;

/// In-memory implementation of [`DocumentStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw documents, returning their assigned ids.
    /// Useful for loading legacy-shaped fixtures in tests.
    pub async fn seed(&self, docs: impl IntoIterator<Item = Value>) -> Vec<String> {
        let mut guard = self.docs.write().await;
        docs.into_iter()
            .map(|data| {
                let id = Uuid::now_v7().to_string();
                guard.insert(id.clone(), data);
                id
            })
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, data: Value) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();
        self.docs.write().await.insert(id.clone(), data);
        Ok(id)
    }

    async fn update(&self, id: &str, data: Value) -> Result<(), StoreError> {
        let mut guard = self.docs.write().await;
        match guard.get_mut(id) {
            Some(slot) => {
                *slot = data;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.docs.write().await.remove(id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Document, StoreError> {
        let guard = self.docs.read().await;
        guard
            .get(id)
            .map(|data| Document {
                id: id.to_string(),
                data: data.clone(),
            })
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<Document>, StoreError> {
        let guard = self.docs.read().await;
        Ok(guard
            .iter()
            .map(|(id, data)| Document {
                id: id.clone(),
                data: data.clone(),
            })
            .collect())
    }
}
