//! Static sexagenary tables for Four Pillars (사주) calculation.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches with their glyphs,
//!   elements and polarity
//! - [`Pillar`], a stem + branch pair on the 60-position cycle
//! - The five-tiger and five-rat start-stem rules
//! - The ten-gods relation table
//!
//! Everything here is a `const fn` over closed enums; no index can fall
//! outside its table.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, YinYang};
pub use pillar::{Pillar, SEXAGENARY_CYCLE};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
