//! Four Pillars (사주) birth-chart engine.
//!
//! Converts a birth date, optional birth time and lunar flag into four
//! stem-branch pillars plus the derived element balance, ten-gods tags and
//! the currently active major cycle (대운).
//!
//! Pipeline: [`saju_calendar::normalize_birth`] → solar-term position →
//! year / month / day / hour pillars → [`ElementBalance`], [`TenGodsMap`],
//! [`DaeunPeriod`]. Every stage is a pure function; a chart is never
//! mutated after [`calculate_chart`] returns it.

pub mod chart;
pub mod daeun;
pub mod elements;
pub mod error;
pub mod pillars;
pub mod ten_gods;

pub use chart::{BirthInput, FourPillarsChart, PillarInfo, calculate_chart};
pub use daeun::{
    DAEUN_SPAN_YEARS, DAEUN_START_AGE, DaeunPeriod, MAX_DAEUN_CYCLES, daeun_period,
    daeun_timeline, decade_index,
};
pub use elements::ElementBalance;
pub use error::ChartError;
pub use pillars::{
    DAY_EPOCH_DAYS_FROM_CE, DAY_EPOCH_NUMBER, DayPillar, YEAR_CYCLE_OFFSET, day_pillar,
    days_since_epoch, hour_branch, hour_pillar, month_pillar, year_pillar,
};
pub use ten_gods::TenGodsMap;
