use chrono::{Datelike, NaiveDate};
use ganzhi_base::{
    Chart, ElementAnalysis, GanzhiError, LunarDate, LunarOutOfRange, Zodiac, analyze_elements,
    try_compute_chart,
};

/// Chart for a validated calendar date, with an optional hour in `0..=23`.
pub fn chart_for_date(date: NaiveDate, hour: Option<u32>) -> Result<Chart, GanzhiError> {
    try_compute_chart(date.year(), date.month(), date.day(), hour)
}

/// Chart plus element analysis in one call.
pub fn elements_for_date(
    date: NaiveDate,
    hour: Option<u32>,
) -> Result<(Chart, ElementAnalysis), GanzhiError> {
    let chart = chart_for_date(date, hour)?;
    let analysis = analyze_elements(&chart);
    Ok((chart, analysis))
}

/// Lunar month/day, logging dates that no table covers.
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, LunarOutOfRange> {
    ganzhi_base::lunar_date(date).inspect_err(|err| tracing::debug!(%err, "lunar lookup failed"))
}

/// Lunar label such as `正月初一`, via [`lunar_date`].
pub fn lunar_label(date: NaiveDate) -> Result<String, LunarOutOfRange> {
    lunar_date(date).map(|d| d.label())
}

/// Resolve a sign from its Chinese or English name.
pub fn zodiac_from_name(name: &str) -> Result<Zodiac, GanzhiError> {
    Zodiac::from_name(name).ok_or_else(|| GanzhiError::UnknownSymbol(name.to_owned()))
}
