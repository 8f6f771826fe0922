//! Invoice domain errors

use thiserror::Error;

/// Errors around service-plan codes and the fee schedule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// A plan code outside the six defined values
    #[error("Unknown service plan code: {0:?}")]
    UnknownCode(String),

    /// A legacy numeric plan code outside the recoverable 1..=3 range
    #[error("Legacy numeric plan code out of range: {0}")]
    LegacyCodeOutOfRange(i64),

    /// A fee schedule missing one of the six plan codes
    #[error("Fee schedule is missing plan code {0:?}")]
    IncompleteSchedule(&'static str),
}
