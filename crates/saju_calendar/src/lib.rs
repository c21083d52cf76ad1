//! Calendar front end for Four Pillars charts.
//!
//! This crate provides:
//! - Birth date parsing (calendar dates and timestamps)
//! - Birth time label resolution (`HH:MM` or the twelve named periods)
//! - The fixed +30 day lunar→solar approximation
//! - Fixed-date solar-term boundaries for the sexagenary year and month
//! - Calendar-year age
//!
//! Solar terms are approximated by fixed calendar days; no astronomical
//! computation is performed.

pub mod age;
pub mod date;
pub mod error;
pub mod normalize;
pub mod solar_term;
pub mod time_label;

pub use age::current_age;
pub use date::parse_birth_date;
pub use error::CalendarError;
pub use normalize::{LUNAR_OFFSET_DAYS, NormalizedBirth, lunar_to_solar_approx, normalize_birth};
pub use solar_term::{
    ALL_SOLAR_TERMS, LICHUN_CUTOFF, SolarTerm, SolarTermPosition, sexagenary_year,
    solar_term_for, solar_term_position,
};
pub use time_label::{BirthHour, HourSource, TimePeriod, all_time_periods, parse_time_label};
