//! Month and year boundaries from fixed-date solar terms (절기).
//!
//! Each sexagenary month starts at one of the twelve "jeol" terms. True
//! term instants drift by a day or so from year to year; here every term is
//! pinned to a fixed calendar day instead.
//!
//! The sexagenary year turns at 입춘 (Lichun, Feb 4). Month index 0 is the
//! 寅 month starting at 입춘 and index 11 is the 丑 month, which here covers
//! all of January up to Feb 3.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The twelve month-opening solar terms, in month-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 terms in month-index order (0 = 입춘).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Terms in the order their cutoffs fall within a calendar year.
const CALENDAR_ORDER: [SolarTerm; 12] = [
    SolarTerm::Sohan,
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
];

/// (month, day) on which the sexagenary year turns.
pub const LICHUN_CUTOFF: (u32, u32) = SolarTerm::Ipchun.cutoff();

impl SolarTerm {
    /// Korean name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Classical name.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "淸明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
            Self::Sohan => "小寒",
        }
    }

    /// Month index (0..=11) the term opens.
    pub const fn month_index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baengno => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// Fixed (month, day) from which the term's month is counted.
    ///
    /// 소한 is pinned to Jan 1 so that January never falls back into the
    /// 대설 month.
    pub const fn cutoff(self) -> (u32, u32) {
        match self {
            Self::Ipchun => (2, 4),
            Self::Gyeongchip => (3, 6),
            Self::Cheongmyeong => (4, 5),
            Self::Ipha => (5, 6),
            Self::Mangjong => (6, 6),
            Self::Soseo => (7, 7),
            Self::Ipchu => (8, 8),
            Self::Baengno => (9, 8),
            Self::Hallo => (10, 8),
            Self::Ipdong => (11, 8),
            Self::Daeseol => (12, 7),
            Self::Sohan => (1, 1),
        }
    }
}

/// Sexagenary year and month resolved for one solar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermPosition {
    /// Calendar year, minus one before 입춘.
    pub sexagenary_year: i32,
    /// 0 = 寅 month (from 입춘) .. 11 = 丑 month.
    pub month_index: u8,
    /// Term that opened the month.
    pub term: SolarTerm,
}

/// Term whose month contains the given (month, day).
pub fn solar_term_for(month: u32, day: u32) -> SolarTerm {
    let md = (month, day);
    let mut current = SolarTerm::Sohan;
    for term in CALENDAR_ORDER {
        if term.cutoff() <= md {
            current = term;
        }
    }
    current
}

/// Sexagenary year for a solar date, turning at 입춘.
pub fn sexagenary_year(date: NaiveDate) -> i32 {
    if (date.month(), date.day()) < LICHUN_CUTOFF {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Resolve the sexagenary year and month index of a solar date.
///
/// Total: every date maps to exactly one position.
pub fn solar_term_position(date: NaiveDate) -> SolarTermPosition {
    let term = solar_term_for(date.month(), date.day());
    let position = SolarTermPosition {
        sexagenary_year: sexagenary_year(date),
        month_index: term.month_index(),
        term,
    };
    tracing::trace!(%date, year = position.sexagenary_year, month_index = position.month_index, "solar term position");
    position
}
