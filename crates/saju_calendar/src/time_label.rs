//! Birth time labels: clock times and the twelve two-hour periods (시진).
//!
//! Period 자시 spans 23:00-01:00 and each following branch takes the next
//! two hours, so 해시 spans 21:00-23:00. A period label resolves to the
//! clock hour at its midpoint (자시 → 0, 축시 → 2, ..., 해시 → 22).

use std::sync::LazyLock;

use regex::Regex;
use saju_base::{ALL_BRANCHES, EarthlyBranch};
use serde::{Deserialize, Serialize};

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{2})(?:$|\D)").expect("clock-time pattern compiles")
});

/// One of the twelve two-hour periods of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePeriod {
    /// Branch naming the period.
    pub branch: EarthlyBranch,
    /// Korean label, e.g. "자시".
    pub label: &'static str,
    /// Classical label, e.g. "子時".
    pub hanja_label: &'static str,
    /// First clock hour of the period (inclusive).
    pub start_hour: u8,
    /// Clock hour the period ends at (exclusive).
    pub end_hour: u8,
    /// Midpoint clock hour used when only the period is known.
    pub midpoint_hour: u8,
}

impl TimePeriod {
    /// Period named by `branch`.
    pub const fn of(branch: EarthlyBranch) -> Self {
        let midpoint_hour = branch.index() * 2;
        let (label, hanja_label) = period_labels(branch);
        Self {
            branch,
            label,
            hanja_label,
            start_hour: (midpoint_hour + 23) % 24,
            end_hour: midpoint_hour + 1,
            midpoint_hour,
        }
    }

    /// Period containing a clock hour (0..=23).
    pub const fn containing_hour(hour: u8) -> Self {
        Self::of(EarthlyBranch::from_cycle(((hour as i64) + 1) / 2))
    }
}

const fn period_labels(branch: EarthlyBranch) -> (&'static str, &'static str) {
    match branch {
        EarthlyBranch::Ja => ("자시", "子時"),
        EarthlyBranch::Chuk => ("축시", "丑時"),
        EarthlyBranch::In => ("인시", "寅時"),
        EarthlyBranch::Myo => ("묘시", "卯時"),
        EarthlyBranch::Jin => ("진시", "辰時"),
        EarthlyBranch::Sa => ("사시", "巳時"),
        EarthlyBranch::O => ("오시", "午時"),
        EarthlyBranch::Mi => ("미시", "未時"),
        EarthlyBranch::Sin => ("신시", "申時"),
        EarthlyBranch::Yu => ("유시", "酉時"),
        EarthlyBranch::Sul => ("술시", "戌時"),
        EarthlyBranch::Hae => ("해시", "亥時"),
    }
}

/// All twelve periods in branch order, starting with 자시.
pub fn all_time_periods() -> [TimePeriod; 12] {
    ALL_BRANCHES.map(TimePeriod::of)
}

/// Where a resolved birth hour came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourSource {
    /// An explicit `HH:MM` clock time.
    Clock,
    /// A named two-hour period, resolved to its midpoint.
    Period(EarthlyBranch),
}

/// A birth time resolved to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthHour {
    /// Hour of day (0..=23).
    pub hour: u8,
    /// Minute (0..=59); 0 when resolved from a period.
    pub minute: u8,
    pub source: HourSource,
}

/// Resolve a birth time label.
///
/// Clock times are tried first, then period names (Korean or Hanja, with
/// anything after the name ignored, so `"축시 (01:00 - 03:00)"` resolves to
/// 축시). Anything else yields `None`: an unrecognized label means "no
/// time", not an error.
pub fn parse_time_label(label: &str) -> Option<BirthHour> {
    if let Some(caps) = CLOCK_TIME.captures(label) {
        let hour: u8 = caps[1].parse().ok()?;
        let minute: u8 = caps[2].parse().ok()?;
        if hour < 24 && minute < 60 {
            return Some(BirthHour {
                hour,
                minute,
                source: HourSource::Clock,
            });
        }
        return None;
    }

    let trimmed = label.trim();
    ALL_BRANCHES
        .iter()
        .map(|b| TimePeriod::of(*b))
        .find(|p| trimmed.starts_with(p.label) || trimmed.starts_with(p.hanja_label))
        .map(|p| BirthHour {
            hour: p.midpoint_hour,
            minute: 0,
            source: HourSource::Period(p.branch),
        })
}
