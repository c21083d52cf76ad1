//! Major cycles (대운): decade-long pillars stepped forward from the month pillar.
//!
//! The first cycle always starts at age 10 and every cycle runs forward
//! along the sexagenary sequence. Classical practice derives both the start
//! age and the direction from gender and year-stem polarity; neither is
//! done here, and callers rely on the fixed behavior.

use saju_base::Pillar;
use serde::{Deserialize, Serialize};

/// Age at which the first major cycle begins.
pub const DAEUN_START_AGE: i32 = 10;

/// Length of one major cycle in years.
pub const DAEUN_SPAN_YEARS: i32 = 10;

/// Upper bound on cycles returned by [`daeun_timeline`].
pub const MAX_DAEUN_CYCLES: usize = 12;

/// One decade of the major-cycle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaeunPeriod {
    /// Age the period was resolved for (calendar-year difference).
    pub current_age: i32,
    /// Age at which the first cycle begins, always [`DAEUN_START_AGE`].
    pub cycle_start_age: i32,
    /// 0 for the first cycle; negative before it starts.
    pub decade_index: i32,
    /// First age of this decade.
    pub start_age: i32,
    /// Last age of this decade, `start_age + 9`.
    pub end_age: i32,
    pub pillar: Pillar,
}

impl DaeunPeriod {
    fn at_decade(month: Pillar, current_age: i32, decade_index: i32) -> Self {
        let start_age = DAEUN_START_AGE + decade_index * DAEUN_SPAN_YEARS;
        Self {
            current_age,
            cycle_start_age: DAEUN_START_AGE,
            decade_index,
            start_age,
            end_age: start_age + DAEUN_SPAN_YEARS - 1,
            pillar: month.advance(decade_index as i64 + 1),
        }
    }

    /// Whether `age` falls in this decade.
    pub const fn contains(&self, age: i32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// Decade index active at `age` (floor division, so ages below 10 give -1 or less).
pub const fn decade_index(age: i32) -> i32 {
    (age - DAEUN_START_AGE).div_euclid(DAEUN_SPAN_YEARS)
}

/// Major cycle active at `current_age`.
pub fn daeun_period(month: Pillar, current_age: i32) -> DaeunPeriod {
    DaeunPeriod::at_decade(month, current_age, decade_index(current_age))
}

/// The first `cycles` major cycles from age 10, capped at [`MAX_DAEUN_CYCLES`].
pub fn daeun_timeline(month: Pillar, current_age: i32, cycles: usize) -> Vec<DaeunPeriod> {
    let n = cycles.min(MAX_DAEUN_CYCLES);
    if n < cycles {
        tracing::debug!(requested = cycles, returned = n, "major cycle timeline capped");
    }
    (0..n as i32)
        .map(|d| DaeunPeriod::at_decade(month, current_age, d))
        .collect()
}
