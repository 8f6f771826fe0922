//! Invoice Domain
//!
//! This crate owns the financial heart of the system: the closed set of
//! service plans, the fixed fee schedule, and the charge derivation engine
//! that splits a gross invoice amount into fixed fee, excess, VAT components
//! and dealer commission.
//!
//! Derived charges are never accepted from callers — they are recomputed from
//! `(gross_total, plan)` on every create and update, and the derivation is
//! exact decimal arithmetic so recomputation is always byte-identical.

pub mod error;
pub mod plan;
pub mod schedule;
pub mod valuation;
pub mod invoice;

pub use error::PlanError;
pub use plan::ServicePlan;
pub use schedule::{vat_rate, FeeSchedule};
pub use valuation::DerivedCharges;
pub use invoice::{FuelType, Invoice, InvoiceDraft, VehicleInfo};
