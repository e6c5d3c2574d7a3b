//! Error types for Outlay core operations.
//!
//! Validation errors are raised at the input boundary, before an `Expense`
//! is ever constructed; the store and query engine only ever see typed
//! values. The CLI layer maps these to user-friendly messages.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for Outlay operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for Outlay operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed date or amount text
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Amount below zero
    #[error("Amount must be non-negative, got {0}")]
    NegativeValue(Decimal),

    /// Blank value where text is required
    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    /// Date range filter with start after end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Expense lookup by id came up empty
    #[error("No expense with id {0}")]
    NotFound(u64),

    /// Backing file error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
