//! Application-layer errors

use thiserror::Error;

use core_kernel::TemporalError;
use infra_store::StoreError;

/// Errors surfaced to the hosting application
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed field validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Input carried an invalid amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Input carried an unparseable date
    #[error(transparent)]
    Temporal(#[from] TemporalError),

    /// The storage collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
