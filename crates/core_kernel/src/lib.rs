//! Core Kernel - Foundational types and utilities for the invoicing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic and es-EC currency rendering
//! - Local calendar dates (parsing, formatting, ranges, year arithmetic)
//! - Accent-insensitive text matching for free-form search fields
//! - Common identifiers

pub mod money;
pub mod temporal;
pub mod text;
pub mod identifiers;

pub use money::{Money, Rate};
pub use temporal::{
    add_calendar_years, days_between, format_short_date, parse_local_date, DateRange,
    TemporalError,
};
pub use text::{matches_search, normalize_search};
pub use identifiers::InvoiceId;
