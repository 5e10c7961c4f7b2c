//! Integration tests for charts, element analysis and lunar labels.

use ganzhi_base::{
    Element, LunarSource, Pillar, Strength, Zodiac, analyze_elements, civil_date, compute_chart,
    lunar_date, lunar_label, reference_year, try_compute_chart,
};

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

#[test]
fn chart_1990_01_01_golden() {
    let chart = compute_chart(1990, 1, 1, None);
    let names: Vec<String> = chart.pillars().map(Pillar::name).collect();
    assert_eq!(names, ["庚午", "戊寅", "乙酉"]);
    assert_eq!(chart.zodiac(), Zodiac::Horse);
}

#[test]
fn chart_reproduces_across_calls() {
    for hour in [None, Some(0), Some(13), Some(23)] {
        assert_eq!(
            compute_chart(1990, 1, 1, hour),
            compute_chart(1990, 1, 1, hour)
        );
    }
}

#[test]
fn year_pillar_sweep_1984_to_2043() {
    // One full sexagenary cycle starting at 甲子 (1984).
    for (i, year) in (1984..2044).enumerate() {
        let chart = compute_chart(year, 6, 1, None);
        assert_eq!(chart.year.cycle_index() as usize, i, "year {year}");
    }
}

#[test]
fn validated_chart_matches_unchecked() {
    let checked = try_compute_chart(2001, 9, 11, Some(8)).unwrap();
    assert_eq!(checked, compute_chart(2001, 9, 11, Some(8)));
}

// ---------------------------------------------------------------------------
// Five elements
// ---------------------------------------------------------------------------

#[test]
fn element_analysis_1990_01_01() {
    let analysis = analyze_elements(&compute_chart(1990, 1, 1, None));
    assert_eq!(analysis.day_master, Element::Wood);
    assert_eq!(analysis.strength, Strength::Weak);
    assert_eq!(analysis.tally.total(), 6);
}

#[test]
fn element_tally_full_chart_is_eight() {
    for year in (1940..=2025).step_by(7) {
        let analysis = analyze_elements(&compute_chart(year, 4, 18, Some(9)));
        assert_eq!(analysis.tally.total(), 8, "year {year}");
        assert_eq!(analysis.favorable.len() + analysis.unfavorable.len(), 5);
    }
}

// ---------------------------------------------------------------------------
// Lunar
// ---------------------------------------------------------------------------

#[test]
fn reference_years_account_for_all_days() {
    let r2024 = reference_year(2024).unwrap();
    let r2025 = reference_year(2025).unwrap();
    assert_eq!(r2024.total_days(), 354);
    assert_eq!(r2025.total_days(), 384);
    assert_eq!(r2025.total_days() - r2024.total_days(), 30);
}

#[test]
fn lunar_new_year_eve_2025() {
    let date = civil_date(2025, 1, 28).unwrap();
    assert_eq!(lunar_label(date).unwrap(), "腊月廿九");
}

#[test]
fn dragon_boat_2024() {
    let date = civil_date(2024, 6, 10).unwrap();
    assert_eq!(lunar_label(date).unwrap(), "五月初五");
}

#[test]
fn fallback_year_is_marked_approximate() {
    let date = civil_date(1999, 7, 1).unwrap();
    let lunar = lunar_date(date).unwrap();
    assert_eq!(lunar.source, LunarSource::Approximate);
    assert!((1..=12).contains(&lunar.month));
    assert!((1..=30).contains(&lunar.day));
}
