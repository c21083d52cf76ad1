//! Year, month, day and hour pillar calculators.
//!
//! Each is a pure function of already-resolved calendar quantities; the
//! month and hour pillars additionally take a sibling pillar's stem.

use chrono::{Datelike, NaiveDate};
use saju_base::{EarthlyBranch, HeavenlyStem, Pillar};
use serde::{Deserialize, Serialize};

/// Year offset so that CE 4 is 갑자 (position 0).
pub const YEAR_CYCLE_OFFSET: i64 = 4;

/// Day reference epoch, 1900-01-01, as days from 0001-01-01 (CE day 1).
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 693_596;

/// Sexagenary day number assigned to the epoch day.
pub const DAY_EPOCH_NUMBER: i64 = 40;

/// Year pillar for a sexagenary year (already adjusted for 입춘).
pub const fn year_pillar(sexagenary_year: i32) -> Pillar {
    Pillar::from_sexagenary(sexagenary_year as i64 - YEAR_CYCLE_OFFSET)
}

/// Month pillar from the month index (0 = 寅 month) and the year stem.
///
/// The stem counts on from the five-tiger start stem; the branch is offset
/// by 2 because month index 0 is the Tiger (寅) month.
pub const fn month_pillar(month_index: u8, year_stem: HeavenlyStem) -> Pillar {
    Pillar::new(
        year_stem.five_tiger_start().advance(month_index as i64),
        EarthlyBranch::from_cycle(month_index as i64 + 2),
    )
}

/// Day pillar together with its position on the 60-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPillar {
    pub pillar: Pillar,
    /// Sexagenary day number (0..=59).
    pub day_number: u8,
}

/// Days from the 1900-01-01 epoch (negative before it).
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    (date.num_days_from_ce() - DAY_EPOCH_DAYS_FROM_CE) as i64
}

/// Day pillar for a solar date.
///
/// Consecutive dates always advance the day number by exactly one.
pub fn day_pillar(date: NaiveDate) -> DayPillar {
    let day_number = (days_since_epoch(date) + DAY_EPOCH_NUMBER).rem_euclid(60);
    DayPillar {
        pillar: Pillar::from_sexagenary(day_number),
        day_number: day_number as u8,
    }
}

/// Branch of the two-hour bin containing `hour` (23:00-01:00 → 자).
pub const fn hour_branch(hour: u8) -> EarthlyBranch {
    EarthlyBranch::from_cycle((hour as i64 + 1) / 2)
}

/// Hour pillar from a clock hour (0..=23) and the day stem.
///
/// The stem counts on from the five-rat start stem by the hour branch.
pub const fn hour_pillar(hour: u8, day_stem: HeavenlyStem) -> Pillar {
    let branch = hour_branch(hour);
    Pillar::new(day_stem.five_rat_start().advance(branch.index() as i64), branch)
}
