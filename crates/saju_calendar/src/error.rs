//! Error types for birth-record normalization.

use thiserror::Error;

/// Errors from parsing or shifting a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The birth date string is not a recognized calendar date.
    #[error("invalid birth date: {0}")]
    InvalidDate(String),
    /// Date arithmetic left the supported calendar range.
    #[error("date out of range: {0}")]
    OutOfRange(&'static str),
}
