//! Invoice repository
//!
//! Translates between typed invoices and the document collection. This is
//! the data-model boundary: legacy numeric plan codes are normalized by the
//! invoice deserializer as documents load here, and documents that cannot be
//! decoded (including any with an unparseable invoice date) are skipped with
//! a warning instead of failing the whole query — every error stays local to
//! one invoice.

use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

use core_kernel::{DateRange, InvoiceId};
use domain_invoice::Invoice;

use crate::document::{Document, DocumentStore};
use crate::error::StoreError;

/// Repository over any [`DocumentStore`]
#[derive(Debug)]
pub struct InvoiceRepository<S> {
    store: S,
}

impl<S: DocumentStore> InvoiceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists a new invoice. The store assigns the id; the returned
    /// invoice carries it.
    pub async fn create(&self, mut invoice: Invoice) -> Result<Invoice, StoreError> {
        let doc = serde_json::to_value(&invoice)?;
        let id = self.store.insert(doc).await?;
        invoice.id =
            InvoiceId::from_str(&id).map_err(|_| StoreError::InvalidId(id.clone()))?;
        Ok(invoice)
    }

    /// Writes the full current state of an existing invoice
    pub async fn save(&self, invoice: &Invoice) -> Result<(), StoreError> {
        let doc = serde_json::to_value(invoice)?;
        self.store
            .update(&invoice.id.as_uuid().to_string(), doc)
            .await
    }

    /// Deletes one invoice; no cascading effects
    pub async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
        self.store.delete(&id.as_uuid().to_string()).await
    }

    /// Loads one invoice by id
    pub async fn find(&self, id: InvoiceId) -> Result<Invoice, StoreError> {
        let doc = self.store.get(&id.as_uuid().to_string()).await?;
        decode(doc).ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Every decodable invoice, ordered by invoice date descending
    pub async fn list_all(&self) -> Result<Vec<Invoice>, StoreError> {
        let mut invoices: Vec<Invoice> = self
            .store
            .list()
            .await?
            .into_iter()
            .filter_map(decode)
            .collect();
        invoices.sort_by_key(|i| std::cmp::Reverse(i.invoice_date));
        Ok(invoices)
    }

    /// Invoices dated inside `range` (the whole end day included), ordered
    /// by invoice date descending. Invoices whose date could not be parsed
    /// never reach the range check: they are skipped at decode time.
    pub async fn list_by_range(&self, range: DateRange) -> Result<Vec<Invoice>, StoreError> {
        let mut invoices = self.list_all().await?;
        invoices.retain(|i| range.contains(i.invoice_date));
        Ok(invoices)
    }
}

fn decode(doc: Document) -> Option<Invoice> {
    let Document { id, data } = doc;
    match serde_json::from_value::<Invoice>(data) {
        Ok(mut invoice) => match InvoiceId::from_str(&id) {
            Ok(invoice_id) => {
                invoice.id = invoice_id;
                Some(invoice)
            }
            Err(_) => {
                warn!(document_id = %id, "skipping document with malformed id");
                None
            }
        },
        Err(error) => {
            warn!(document_id = %id, %error, "skipping undecodable invoice document");
            None
        }
    }
}

/// Seeds raw documents straight into a store, bypassing the typed layer.
/// Intended for migrations and tests that need legacy-shaped data.
pub async fn seed_documents<S: DocumentStore>(
    store: &S,
    docs: impl IntoIterator<Item = Value>,
) -> Result<Vec<String>, StoreError> {
    let mut ids = Vec::new();
    for doc in docs {
        ids.push(store.insert(doc).await?);
    }
    Ok(ids)
}
