//! Chart assembly: birth record in, immutable [`FourPillarsChart`] out.

use chrono::NaiveDate;
use saju_base::{Element, Pillar, YinYang};
use saju_calendar::{
    NormalizedBirth, SolarTermPosition, current_age, normalize_birth, parse_birth_date,
    solar_term_position,
};
use serde::{Deserialize, Serialize};

use crate::daeun::{DaeunPeriod, daeun_period};
use crate::elements::ElementBalance;
use crate::error::ChartError;
use crate::pillars::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::ten_gods::TenGodsMap;

/// A raw birth record as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Calendar date as given, solar or lunar depending on `is_lunar`.
    pub birth_date: NaiveDate,
    /// `HH:MM` or a named two-hour period such as "자시"; `None` if unknown.
    pub birth_time: Option<String>,
    pub is_lunar: bool,
}

impl BirthInput {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date,
            birth_time: None,
            is_lunar: false,
        }
    }

    /// Build from textual fields, failing on an unparseable date.
    pub fn parse(date: &str, time: Option<&str>, is_lunar: bool) -> Result<Self, ChartError> {
        let birth_date = parse_birth_date(date)?;
        Ok(Self {
            birth_date,
            birth_time: time.map(str::to_owned),
            is_lunar,
        })
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.birth_time = Some(time.into());
        self
    }

    pub fn with_lunar(mut self, is_lunar: bool) -> Self {
        self.is_lunar = is_lunar;
        self
    }
}

/// A pillar with its derived display and element attributes.
///
/// Built only by [`calculate_chart`]; every attribute is read through an
/// accessor so it always agrees with [`PillarInfo::pillar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarInfo {
    pillar: Pillar,
    /// Native script, e.g. "갑자".
    hangul: String,
    /// Classical script, e.g. "甲子".
    hanja: String,
    stem_hangul: String,
    stem_hanja: String,
    branch_hangul: String,
    branch_hanja: String,
    stem_element: Element,
    stem_yin_yang: YinYang,
    branch_element: Element,
    /// Position on the 60-cycle (갑자 = 0); `None` for a mixed-parity pair.
    sexagenary_index: Option<u8>,
}

impl PillarInfo {
    pub fn new(pillar: Pillar) -> Self {
        Self {
            pillar,
            hangul: pillar.hangul(),
            hanja: pillar.hanja(),
            stem_hangul: pillar.stem.hangul().to_owned(),
            stem_hanja: pillar.stem.hanja().to_owned(),
            branch_hangul: pillar.branch.hangul().to_owned(),
            branch_hanja: pillar.branch.hanja().to_owned(),
            stem_element: pillar.stem.element(),
            stem_yin_yang: pillar.stem.yin_yang(),
            branch_element: pillar.branch.element(),
            sexagenary_index: pillar.sexagenary_index(),
        }
    }

    pub fn pillar(&self) -> Pillar {
        self.pillar
    }

    pub fn hangul(&self) -> &str {
        &self.hangul
    }

    pub fn hanja(&self) -> &str {
        &self.hanja
    }

    pub fn stem_hangul(&self) -> &str {
        &self.stem_hangul
    }

    pub fn stem_hanja(&self) -> &str {
        &self.stem_hanja
    }

    pub fn branch_hangul(&self) -> &str {
        &self.branch_hangul
    }

    pub fn branch_hanja(&self) -> &str {
        &self.branch_hanja
    }

    pub fn stem_element(&self) -> Element {
        self.stem_element
    }

    pub fn stem_yin_yang(&self) -> YinYang {
        self.stem_yin_yang
    }

    pub fn branch_element(&self) -> Element {
        self.branch_element
    }

    pub fn sexagenary_index(&self) -> Option<u8> {
        self.sexagenary_index
    }
}

/// The complete chart for one birth record.
///
/// Fields are private; a chart never changes after [`calculate_chart`]
/// returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillarsChart {
    birth: NormalizedBirth,
    /// Sexagenary year and month the solar date resolved to.
    position: SolarTermPosition,
    year: PillarInfo,
    month: PillarInfo,
    day: PillarInfo,
    /// Absent iff no usable birth time was supplied.
    hour: Option<PillarInfo>,
    /// Sexagenary day number (0..=59).
    day_number: u8,
    elements: ElementBalance,
    ten_gods: TenGodsMap,
    daeun: DaeunPeriod,
}

impl FourPillarsChart {
    pub fn birth(&self) -> NormalizedBirth {
        self.birth
    }

    pub fn position(&self) -> SolarTermPosition {
        self.position
    }

    pub fn year(&self) -> &PillarInfo {
        &self.year
    }

    pub fn month(&self) -> &PillarInfo {
        &self.month
    }

    pub fn day(&self) -> &PillarInfo {
        &self.day
    }

    pub fn hour(&self) -> Option<&PillarInfo> {
        self.hour.as_ref()
    }

    pub fn day_number(&self) -> u8 {
        self.day_number
    }

    pub fn elements(&self) -> ElementBalance {
        self.elements
    }

    pub fn ten_gods(&self) -> TenGodsMap {
        self.ten_gods
    }

    pub fn daeun(&self) -> DaeunPeriod {
        self.daeun
    }

    /// Present pillars in year, month, day, hour order.
    pub fn pillars(&self) -> Vec<Pillar> {
        let mut out = vec![self.year.pillar, self.month.pillar, self.day.pillar];
        if let Some(h) = &self.hour {
            out.push(h.pillar);
        }
        out
    }

    /// Present pillars in native script joined by spaces.
    pub fn chart_string(&self) -> String {
        self.pillars()
            .iter()
            .map(|p| p.hangul())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Zodiac animal (띠) of the year branch.
    pub fn year_animal(&self) -> &'static str {
        self.year.pillar.branch.animal()
    }

    pub fn dominant_element(&self) -> Element {
        self.elements.dominant()
    }

    pub fn lacking_element(&self) -> Element {
        self.elements.lacking()
    }

    pub fn has_hour(&self) -> bool {
        self.hour.is_some()
    }
}

/// Calculate the chart for `input`, resolving the major cycle at `as_of`.
///
/// Deterministic in `(input, as_of)`. Age for the major cycle is the plain
/// year difference between `as_of` and the birth year as supplied.
pub fn calculate_chart(input: &BirthInput, as_of: NaiveDate) -> Result<FourPillarsChart, ChartError> {
    let birth = normalize_birth(input.birth_date, input.birth_time.as_deref(), input.is_lunar)?;
    let position = solar_term_position(birth.solar_date);

    let year = year_pillar(position.sexagenary_year);
    let month = month_pillar(position.month_index, year.stem);
    let day = day_pillar(birth.solar_date);
    let hour = birth.hour.map(|h| hour_pillar(h.hour, day.pillar.stem));

    let mut present = vec![year, month, day.pillar];
    present.extend(hour);
    let elements = ElementBalance::from_pillars(&present);

    let ten_gods = TenGodsMap::resolve(day.pillar.stem, year.stem, month.stem, hour.map(|h| h.stem));

    let age = current_age(input.birth_date, as_of);
    let daeun = daeun_period(month, age);

    tracing::debug!(
        solar_date = %birth.solar_date,
        year = %year,
        month = %month,
        day = %day.pillar,
        hour = ?hour.map(|h| h.to_string()),
        age,
        "chart calculated"
    );

    Ok(FourPillarsChart {
        birth,
        position,
        year: PillarInfo::new(year),
        month: PillarInfo::new(month),
        day: PillarInfo::new(day.pillar),
        hour: hour.map(PillarInfo::new),
        day_number: day.day_number,
        elements,
        ten_gods,
        daeun,
    })
}
