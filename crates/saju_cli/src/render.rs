//! Text and JSON rendering of charts and tables.

use anyhow::{Context, Result};
use saju_base::{ALL_BRANCHES, ALL_STEMS, Element};
use saju_calendar::all_time_periods;
use saju_chart::{DaeunPeriod, FourPillarsChart, PillarInfo};
use serde::Serialize;

/// Chart plus an optional major-cycle listing, serialized as one object.
#[derive(Debug, Serialize)]
pub struct ChartReport<'a> {
    #[serde(flatten)]
    pub chart: &'a FourPillarsChart,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub daeun_timeline: Vec<DaeunPeriod>,
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.context("failed to serialize output")
}

fn pillar_line(label: &str, info: &PillarInfo) -> String {
    format!(
        "{label:<6}{} ({})  {} {}/{}  #{}\n",
        info.hangul(),
        info.hanja(),
        info.stem_yin_yang().hangul(),
        info.stem_element().hangul(),
        info.branch_element().hangul(),
        info.sexagenary_index().map_or_else(|| "-".to_string(), |i| i.to_string()),
    )
}

fn element_line(chart: &FourPillarsChart) -> String {
    let elements = chart.elements();
    let counts: Vec<String> = elements
        .iter()
        .map(|(e, n)| format!("{}({}) {n}", e.hangul(), e.hanja()))
        .collect();
    format!("Elements  {}\n", counts.join("  "))
}

fn element_label(e: Element) -> String {
    format!("{} {}", e.hangul(), e.name())
}

fn daeun_line(p: &DaeunPeriod) -> String {
    format!(
        "{:>3}-{:<3} {} ({})",
        p.start_age,
        p.end_age,
        p.pillar.hangul(),
        p.pillar.hanja()
    )
}

pub fn chart_text(chart: &FourPillarsChart, timeline: &[DaeunPeriod]) -> String {
    let birth = chart.birth();
    let mut out = String::new();

    out.push_str(&format!("Solar date  {}", birth.solar_date));
    if birth.lunar_adjusted {
        out.push_str(" (lunar +30d)");
    }
    out.push('\n');
    if let Some(h) = birth.hour {
        out.push_str(&format!("Birth time  {:02}:{:02}\n", h.hour, h.minute));
    }
    let position = chart.position();
    out.push_str(&format!(
        "Month term  {} ({}), month index {}\n\n",
        position.term.hangul(),
        position.term.hanja(),
        position.month_index
    ));

    out.push_str(&pillar_line("Year", chart.year()));
    out.push_str(&pillar_line("Month", chart.month()));
    out.push_str(&pillar_line("Day", chart.day()));
    match chart.hour() {
        Some(h) => out.push_str(&pillar_line("Hour", h)),
        None => out.push_str("Hour  -\n"),
    }
    out.push_str(&format!(
        "\nChart     {}\nAnimal    {}띠\nDay no.   {}\n",
        chart.chart_string(),
        chart.year_animal(),
        chart.day_number()
    ));

    out.push_str(&element_line(chart));
    out.push_str(&format!(
        "Dominant  {}\nLacking   {}\n",
        element_label(chart.dominant_element()),
        element_label(chart.lacking_element())
    ));

    let tg = chart.ten_gods();
    out.push_str(&format!("Ten gods  year {}  month {}", tg.year, tg.month));
    if let Some(h) = tg.hour {
        out.push_str(&format!("  hour {h}"));
    }
    out.push('\n');

    let daeun = chart.daeun();
    out.push_str(&format!(
        "Daeun     age {}: {}\n",
        daeun.current_age,
        daeun_line(&daeun)
    ));
    for p in timeline {
        let marker = if p.contains(daeun.current_age) { '*' } else { ' ' };
        out.push_str(&format!("        {marker} {}\n", daeun_line(p)));
    }
    out
}

pub fn stems_table() -> String {
    let mut out = String::new();
    for s in ALL_STEMS {
        out.push_str(&format!(
            "{:>2}  {} {}  {:<7} {} {}\n",
            s.index(),
            s.hangul(),
            s.hanja(),
            s.name(),
            s.element().hangul(),
            s.yin_yang().hangul()
        ));
    }
    out
}

pub fn branches_table() -> String {
    let mut out = String::new();
    for b in ALL_BRANCHES {
        out.push_str(&format!(
            "{:>2}  {} {}  {:<5} {}  {} ({})\n",
            b.index(),
            b.hangul(),
            b.hanja(),
            b.name(),
            b.element().hangul(),
            b.animal(),
            b.animal_name()
        ));
    }
    out
}

pub fn periods_table() -> String {
    let mut out = String::new();
    for p in all_time_periods() {
        out.push_str(&format!(
            "{} ({})  {:02}:00-{:02}:00\n",
            p.label, p.hanja_label, p.start_hour, p.end_hour
        ));
    }
    out
}
