//! Golden tests for year/month boundaries and birth normalization.

use chrono::{Datelike, NaiveDate};
use saju_calendar::{
    ALL_SOLAR_TERMS, HourSource, SolarTerm, normalize_birth, parse_birth_date,
    solar_term_position,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Feb 3 belongs to the previous sexagenary year, Feb 4 to its own, for
/// every year in a wide window.
#[test]
fn lichun_boundary_every_year() {
    for y in 1900..=2100 {
        assert_eq!(solar_term_position(ymd(y, 2, 3)).sexagenary_year, y - 1);
        assert_eq!(solar_term_position(ymd(y, 2, 4)).sexagenary_year, y);
    }
}

/// Month index only ever steps forward by one (wrapping 11 → 0 at 입춘)
/// across a full year of consecutive days.
#[test]
fn month_index_steps_by_one() {
    let mut d = ymd(2023, 2, 4);
    let mut prev = solar_term_position(d).month_index;
    assert_eq!(prev, 0);
    let mut changes = 0;
    for _ in 0..366 {
        d = d.succ_opt().unwrap();
        let cur = solar_term_position(d).month_index;
        if cur != prev {
            assert_eq!(cur, (prev + 1) % 12, "at {d}");
            changes += 1;
        }
        prev = cur;
    }
    assert_eq!(changes, 12);
}

#[test]
fn month_cutoffs_2024() {
    let cases = [
        (ymd(2024, 2, 4), SolarTerm::Ipchun),
        (ymd(2024, 3, 6), SolarTerm::Gyeongchip),
        (ymd(2024, 4, 5), SolarTerm::Cheongmyeong),
        (ymd(2024, 5, 6), SolarTerm::Ipha),
        (ymd(2024, 6, 6), SolarTerm::Mangjong),
        (ymd(2024, 7, 7), SolarTerm::Soseo),
        (ymd(2024, 8, 8), SolarTerm::Ipchu),
        (ymd(2024, 9, 8), SolarTerm::Baengno),
        (ymd(2024, 10, 8), SolarTerm::Hallo),
        (ymd(2024, 11, 8), SolarTerm::Ipdong),
        (ymd(2024, 12, 7), SolarTerm::Daeseol),
        (ymd(2024, 1, 1), SolarTerm::Sohan),
    ];
    for (date, term) in cases {
        let p = solar_term_position(date);
        assert_eq!(p.term, term, "{date}");
        assert_eq!(p.month_index, term.month_index());
    }
    assert_eq!(ALL_SOLAR_TERMS.len(), 12);
}

#[test]
fn lunar_record_normalizes_before_boundaries() {
    // lunar Jan 10 → solar Feb 9, which is past 입춘
    let n = normalize_birth(ymd(1995, 1, 10), Some("인시"), true).unwrap();
    assert_eq!(n.solar_date, ymd(1995, 2, 9));
    assert_eq!(n.hour.unwrap().hour, 4);
    assert!(matches!(n.hour.unwrap().source, HourSource::Period(_)));
    let p = solar_term_position(n.solar_date);
    assert_eq!(p.sexagenary_year, 1995);
    assert_eq!(p.month_index, 0);
}

#[test]
fn parse_then_normalize() {
    let d = parse_birth_date("1988-07-15").unwrap();
    let n = normalize_birth(d, Some("13:20"), false).unwrap();
    assert_eq!(n.solar_date.year(), 1988);
    assert_eq!(n.hour.unwrap().hour, 13);
}
