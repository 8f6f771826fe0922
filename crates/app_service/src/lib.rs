//! Application Layer
//!
//! Orchestrates the domain crates over the storage port. The one rule this
//! layer enforces everywhere: derived charges are recomputed from
//! `(gross_total, plan)` inside the same call that writes, so nothing a
//! caller sends can desynchronize an invoice from its own derived fields.
//!
//! Also home to the pieces the hosting application needs around the core:
//! input validation, environment configuration, the restricted-viewer role,
//! and the dealer/color preference catalogs.

pub mod auth;
pub mod config;
pub mod error;
pub mod input;
pub mod preferences;
pub mod service;
pub mod telemetry;

pub use auth::{AuthDirectory, Role};
pub use config::AppConfig;
pub use error::ServiceError;
pub use input::{InvoicePatch, NewInvoiceInput, VehicleInput};
pub use preferences::{Catalogs, MemoryPreferences, PreferenceStore};
pub use service::{InstallationReport, InvoiceService, ProfitPeriod, ProfitReport, VatCut};
pub use telemetry::init_tracing;
