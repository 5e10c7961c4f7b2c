//! Integration tests for ganzhi_rs through its public surface only.

use chrono::NaiveDate;
use ganzhi_rs::*;
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Charts and elements
// ---------------------------------------------------------------------------

#[test]
fn chart_1990_new_year() {
    let chart = compute_chart(1990, 1, 1, None);
    assert_eq!(chart.to_string(), "庚午 戊寅 乙酉");
    assert_eq!(chart.zodiac(), Zodiac::Horse);
}

#[test]
fn chart_for_date_with_hour() {
    let chart = chart_for_date(ymd(1990, 1, 1), Some(12)).unwrap();
    assert_eq!(chart.hour.map(|p| p.to_string()), Some("壬午".to_owned()));
}

#[test]
fn invalid_hour_rejected() {
    let err = chart_for_date(ymd(1990, 1, 1), Some(24)).unwrap_err();
    assert!(matches!(err, GanzhiError::InvalidInput(_)));
}

#[test]
fn elements_1990_new_year() {
    let (_, analysis) = elements_for_date(ymd(1990, 1, 1), None).unwrap();
    assert_eq!(analysis.tally.total(), 6);
    assert_eq!(analysis.strength, Strength::Weak);
    assert_eq!(analysis.tally.missing(), vec![Element::Water]);
}

// ---------------------------------------------------------------------------
// Lunar labels
// ---------------------------------------------------------------------------

#[test]
fn lunar_date_reports_leap_and_out_of_range() {
    let leap = lunar_date(ymd(2025, 7, 25)).unwrap();
    assert_eq!((leap.month, leap.is_leap, leap.day), (6, true, 1));
    assert_eq!(leap.source, LunarSource::Table);
    let date = ymd(2024, 2, 9);
    assert_eq!(lunar_date(date), Err(LunarOutOfRange { date }));
}

#[test]
fn lunar_labels() {
    assert_eq!(lunar_label(ymd(2024, 2, 10)).unwrap(), "正月初一");
    assert_eq!(lunar_label(ymd(2025, 1, 28)).unwrap(), "腊月廿九");
    assert!(lunar_label(ymd(2024, 1, 15)).is_err());
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn engine_cache_matches_pure_function() {
    let date = ymd(2024, 2, 10);
    let mut engine = Engine::with_clock(EngineConfig::default(), ManualClock::new(date)).unwrap();
    let cached = engine.daily_divination(date).clone();
    assert_eq!(cached, daily_divination(date));
    assert_eq!(engine.today(), &cached);
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn engine_peach_defaults_match_free_function() {
    let engine =
        Engine::with_clock(EngineConfig::default(), ManualClock::new(ymd(2024, 1, 1))).unwrap();
    assert_eq!(
        engine.peach_periods(1992, 8, 3, Gender::Female),
        peach_periods(1992, 8, 3, Gender::Female)
    );
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[test]
fn compatibility_by_name() {
    let dragon = zodiac_from_name("龙").unwrap();
    let rabbit = zodiac_from_name("rabbit").unwrap();
    assert_eq!(zodiac_score(dragon, rabbit), 60);
    assert_eq!(compatibility(dragon, rabbit).relation, Relation::Harm);
    assert!(matches!(
        zodiac_from_name("unicorn"),
        Err(GanzhiError::UnknownSymbol(_))
    ));
}

proptest! {
    #[test]
    fn score_symmetric(a in 0usize..12, b in 0usize..12) {
        let (za, zb) = (ALL_ZODIACS[a], ALL_ZODIACS[b]);
        let s = zodiac_score(za, zb);
        prop_assert_eq!(s, zodiac_score(zb, za));
        prop_assert!((60..=99).contains(&s));
    }
}
