//! Birth record normalization: (date, time label, lunar flag) → solar date + hour.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::time_label::{BirthHour, parse_time_label};

/// Fixed shift applied to dates flagged as lunar.
///
/// This approximates lunar→solar conversion and is knowingly inaccurate: a
/// real conversion needs per-year month tables. Charts depend on the exact
/// shift, so it is kept as is.
pub const LUNAR_OFFSET_DAYS: u64 = 30;

/// A birth record with the date moved onto the solar calendar and the
/// time label resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBirth {
    /// Solar calendar date used for every pillar.
    pub solar_date: NaiveDate,
    /// Resolved birth hour; `None` when no usable time was given.
    pub hour: Option<BirthHour>,
    /// Whether the lunar shift was applied.
    pub lunar_adjusted: bool,
}

/// Approximate solar date for a lunar date (fixed +30 day shift).
pub fn lunar_to_solar_approx(lunar: NaiveDate) -> Result<NaiveDate, CalendarError> {
    lunar
        .checked_add_days(Days::new(LUNAR_OFFSET_DAYS))
        .ok_or(CalendarError::OutOfRange("lunar shift past end of calendar"))
}

/// Normalize a birth record.
///
/// An unrecognized time label is not an error; the hour is simply dropped.
pub fn normalize_birth(
    birth_date: NaiveDate,
    birth_time: Option<&str>,
    is_lunar: bool,
) -> Result<NormalizedBirth, CalendarError> {
    let solar_date = if is_lunar {
        let shifted = lunar_to_solar_approx(birth_date)?;
        tracing::debug!(%birth_date, %shifted, "applied fixed lunar offset");
        shifted
    } else {
        birth_date
    };

    let hour = match birth_time {
        Some(label) => {
            let parsed = parse_time_label(label);
            if parsed.is_none() {
                tracing::debug!(label, "unrecognized birth time label, omitting hour pillar");
            }
            parsed
        }
        None => None,
    };

    Ok(NormalizedBirth {
        solar_date,
        hour,
        lunar_adjusted: is_lunar,
    })
}
