//! Ten-gods tags for the non-day pillars.

use saju_base::{HeavenlyStem, TenGod, ten_god};
use serde::{Deserialize, Serialize};

/// Relation of each non-day pillar's stem to the day stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodsMap {
    pub year: TenGod,
    pub month: TenGod,
    /// Present only when the chart has an hour pillar.
    pub hour: Option<TenGod>,
}

impl TenGodsMap {
    pub const fn resolve(
        day: HeavenlyStem,
        year: HeavenlyStem,
        month: HeavenlyStem,
        hour: Option<HeavenlyStem>,
    ) -> Self {
        Self {
            year: ten_god(day, year),
            month: ten_god(day, month),
            hour: match hour {
                Some(h) => Some(ten_god(day, h)),
                None => None,
            },
        }
    }
}
