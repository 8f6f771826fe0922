//! Storage Infrastructure
//!
//! The invoice collection lives behind a small document-store port: an opaque
//! collection of JSON documents with storage-assigned ids. The repository
//! translates documents to typed invoices, which is where legacy records get
//! normalized and malformed ones get skipped.
//!
//! Concurrency contract: each operation is an independent request/response
//! unit; last write wins. There is no optimistic concurrency control.

pub mod document;
pub mod memory;
pub mod repository;
pub mod error;

pub use document::{Document, DocumentStore};
pub use memory::MemoryStore;
pub use repository::InvoiceRepository;
pub use error::StoreError;
