//! End-to-end golden charts and whole-range invariants.

use chrono::NaiveDate;
use saju_base::{HeavenlyStem, TenGod, ten_god};
use saju_chart::{BirthInput, FourPillarsChart, calculate_chart, day_pillar};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chart(input: BirthInput) -> FourPillarsChart {
    calculate_chart(&input, ymd(2024, 6, 1)).unwrap()
}

struct Golden {
    input: BirthInput,
    pillars: &'static str,
    day_number: u8,
    daeun: &'static str,
    daeun_start: i32,
}

fn goldens() -> Vec<Golden> {
    vec![
        Golden {
            input: BirthInput::new(ymd(2000, 1, 1)),
            pillars: "기묘 정축 무자",
            day_number: 24,
            daeun: "기묘",
            daeun_start: 20,
        },
        Golden {
            input: BirthInput::new(ymd(1988, 7, 15)).with_time("13:20"),
            pillars: "무진 기미 신축 을미",
            day_number: 37,
            daeun: "임술",
            daeun_start: 30,
        },
        Golden {
            input: BirthInput::new(ymd(1995, 1, 10)).with_time("인시").with_lunar(true),
            pillars: "을해 무인 신축 경인",
            day_number: 37,
            daeun: "경진",
            daeun_start: 20,
        },
        Golden {
            input: BirthInput::new(ymd(2024, 2, 3)),
            pillars: "계묘 을축 정묘",
            day_number: 3,
            daeun: "을축",
            daeun_start: 0,
        },
        Golden {
            input: BirthInput::new(ymd(2024, 2, 4)),
            pillars: "갑진 병인 무진",
            day_number: 4,
            daeun: "병인",
            daeun_start: 0,
        },
        Golden {
            // 23:00 is 자시 of the same day, no rollover
            input: BirthInput::new(ymd(1990, 5, 17)).with_time("23:10"),
            pillars: "경오 신사 임자 경자",
            day_number: 48,
            daeun: "갑신",
            daeun_start: 30,
        },
        Golden {
            input: BirthInput::new(ymd(1984, 2, 4)).with_time("오시 (11:00 - 13:00)"),
            pillars: "갑자 병인 무술 무오",
            day_number: 34,
            daeun: "경오",
            daeun_start: 40,
        },
    ]
}

#[test]
fn golden_charts() {
    for g in goldens() {
        let c = chart(g.input.clone());
        assert_eq!(c.chart_string(), g.pillars, "{:?}", g.input);
        assert_eq!(c.day_number(), g.day_number, "{:?}", g.input);
        assert_eq!(c.daeun().pillar.to_string(), g.daeun, "{:?}", g.input);
        assert_eq!(c.daeun().start_age, g.daeun_start, "{:?}", g.input);
        assert_eq!(c.daeun().end_age, g.daeun_start + 9);
    }
}

#[test]
fn identical_inputs_identical_charts() {
    let input = BirthInput::new(ymd(1977, 11, 30)).with_time("묘시");
    assert_eq!(chart(input.clone()), chart(input));
}

#[test]
fn year_pillar_repeats_every_60_years() {
    for y in 1900..2040 {
        let a = chart(BirthInput::new(ymd(y, 6, 15)));
        let b = chart(BirthInput::new(ymd(y + 60, 6, 15)));
        assert_eq!(a.year().pillar(), b.year().pillar(), "{y}");
        assert_eq!(a.month().pillar(), b.month().pillar(), "{y}");
    }
}

#[test]
fn day_number_advances_by_one() {
    let mut d = ymd(1899, 6, 1);
    let mut prev = day_pillar(d).day_number;
    for _ in 0..5000 {
        d = d.succ_opt().unwrap();
        let cur = day_pillar(d).day_number;
        assert_eq!(cur, (prev + 1) % 60, "{d}");
        prev = cur;
    }
}

#[test]
fn lichun_boundary_changes_year_pillar() {
    for y in 1950..2050 {
        let before = chart(BirthInput::new(ymd(y, 2, 3)));
        let after = chart(BirthInput::new(ymd(y, 2, 4)));
        assert_eq!(after.year().pillar(), before.year().pillar().advance(1), "{y}");
        assert_eq!(before.position().month_index, 11);
        assert_eq!(after.position().month_index, 0);
    }
}

#[test]
fn element_sum_matches_pillar_count() {
    let mut d = ymd(1990, 1, 1);
    for i in 0..800 {
        let with_hour = i % 2 == 0;
        let mut input = BirthInput::new(d);
        if with_hour {
            input = input.with_time(format!("{:02}:00", i % 24));
        }
        let c = chart(input);
        assert_eq!(c.elements().total(), if with_hour { 8 } else { 6 }, "{d}");
        assert_eq!(c.hour().is_some(), with_hour);
        assert_eq!(c.ten_gods().hour.is_some(), with_hour);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn ten_gods_match_day_stem_relation() {
    let c = chart(BirthInput::new(ymd(1988, 7, 15)).with_time("13:20"));
    let day = c.day().pillar().stem;
    assert_eq!(day, HeavenlyStem::Sin);
    assert_eq!(c.ten_gods().year, ten_god(day, c.year().pillar().stem));
    assert_eq!(c.ten_gods().month, ten_god(day, c.month().pillar().stem));
    // forward distance from 신: 무 +7, 기 +8, 을 +4
    assert_eq!(c.ten_gods().year, TenGod::DirectOfficer);
    assert_eq!(c.ten_gods().month, TenGod::IndirectResource);
    assert_eq!(c.ten_gods().hour, Some(TenGod::IndirectWealth));
}

#[test]
fn daeun_contains_current_age() {
    let input = BirthInput::new(ymd(1970, 8, 1));
    for as_of_year in 1970..2090 {
        let c = calculate_chart(&input, ymd(as_of_year, 1, 1)).unwrap();
        let age = as_of_year - 1970;
        assert_eq!(c.daeun().current_age, age);
        assert!(c.daeun().contains(age), "age {age}");
    }
}

#[test]
fn chart_serializes_to_json() {
    let c = chart(BirthInput::new(ymd(2000, 1, 1)).with_time("자시"));
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["year"]["hangul"], "기묘");
    assert_eq!(json["year"]["hanja"], "己卯");
    assert_eq!(json["elements"]["water"].as_u64().unwrap() as u8, c.elements().water);
    let back: FourPillarsChart = serde_json::from_value(json).unwrap();
    assert_eq!(back, c);
}
