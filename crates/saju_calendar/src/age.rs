//! Age as used for major-cycle lookup.

use chrono::{Datelike, NaiveDate};

/// Plain calendar-year difference between `birth` and `as_of`.
///
/// No birthday adjustment and no Korean-age (세는나이) convention: someone
/// born 1990-12-31 is 34 for the whole of 2024.
pub fn current_age(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    as_of.year() - birth.year()
}
