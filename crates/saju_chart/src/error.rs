//! Error types for chart calculation.

use saju_calendar::CalendarError;
use thiserror::Error;

/// Errors from building a chart.
///
/// Every valid birth record yields a chart; these only cover input that
/// never reaches the calculators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// The birth date could not be parsed.
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),
    /// Date arithmetic left the supported calendar range.
    #[error("birth date out of range: {0}")]
    DateOutOfRange(&'static str),
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidDate(msg) => Self::InvalidBirthDate(msg),
            CalendarError::OutOfRange(msg) => Self::DateOutOfRange(msg),
            other => Self::InvalidBirthDate(other.to_string()),
        }
    }
}
