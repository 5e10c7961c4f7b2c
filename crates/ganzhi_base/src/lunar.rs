//! Gregorian → lunar month/day conversion.
//!
//! Dates inside a hardcoded reference year are resolved exactly from the
//! month-length tables in [`crate::lunar_data`]. Any other year falls back to
//! a crude shift that is only roughly right and is flagged as
//! [`LunarSource::Approximate`].

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::lunar_data::{ReferenceYear, reference_year};

/// Month names, 正月 through 腊月.
pub const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Day names, 初一 through 三十.
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Where a lunar date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarSource {
    /// Resolved from a reference-year table.
    Table,
    /// Fallback shift for years without a table; not authoritative.
    Approximate,
}

/// A lunar month/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// 1..=12
    pub month: u8,
    pub is_leap: bool,
    /// 1..=30, never beyond the month's declared length.
    pub day: u8,
    pub source: LunarSource,
}

impl LunarDate {
    /// Label such as `正月初一` or `闰六月十五`.
    pub fn label(&self) -> String {
        format!("{}{}", month_name(self.month, self.is_leap), day_name(self.day))
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// The date lies outside every table and has no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no lunar table covers {date}")]
pub struct LunarOutOfRange {
    pub date: NaiveDate,
}

/// Month name with `闰` prefix for leap months. `month` is taken mod 12 (1-based).
pub fn month_name(month: u8, leap: bool) -> String {
    let name = MONTH_NAMES[(month as usize + 11) % 12];
    if leap {
        format!("闰{name}")
    } else {
        name.to_owned()
    }
}

/// Day name. `day` is taken mod 30 (1-based).
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES[(day as usize + 29) % 30]
}

/// Convert a Gregorian date to a lunar month/day.
///
/// Offsets before a reference year's epoch fall back to the previous
/// reference year; when there is none the result is [`LunarOutOfRange`].
pub fn lunar_date(date: NaiveDate) -> Result<LunarDate, LunarOutOfRange> {
    let out_of_range = LunarOutOfRange { date };
    let Some(table) = reference_year(date.year()) else {
        return Ok(approximate_lunar_date(date.month(), date.day()));
    };

    let offset = days_from_epoch(table, date).ok_or(out_of_range)?;
    if offset >= 0 {
        return walk_months(table, offset).ok_or(out_of_range);
    }

    let prev = reference_year(date.year() - 1).ok_or(out_of_range)?;
    let offset = days_from_epoch(prev, date).ok_or(out_of_range)?;
    if offset < 0 {
        return Err(out_of_range);
    }
    walk_months(prev, offset).ok_or(out_of_range)
}

/// Lunar label for a Gregorian date, e.g. `腊月廿九`.
pub fn lunar_label(date: NaiveDate) -> Result<String, LunarOutOfRange> {
    lunar_date(date).map(|d| d.label())
}

/// Fallback for years without a table.
///
/// `(month + 10) mod 12` and `(day + 18) mod 30` are 0-based positions in the
/// name lists, so the reported month/day are those plus one.
pub fn approximate_lunar_date(month: u32, day: u32) -> LunarDate {
    let month_idx = (month as u64 + 10) % 12;
    let day_idx = (day as u64 + 18) % 30;
    LunarDate {
        month: month_idx as u8 + 1,
        is_leap: false,
        day: day_idx as u8 + 1,
        source: LunarSource::Approximate,
    }
}

fn days_from_epoch(table: &ReferenceYear, date: NaiveDate) -> Option<i64> {
    let (m, d) = table.epoch;
    let epoch = NaiveDate::from_ymd_opt(table.year, m, d)?;
    Some((date - epoch).num_days())
}

fn walk_months(table: &ReferenceYear, offset: i64) -> Option<LunarDate> {
    let mut remaining = offset;
    for spec in table.months {
        let len = spec.days as i64;
        if remaining < len {
            return Some(LunarDate {
                month: spec.month,
                is_leap: spec.leap,
                day: remaining as u8 + 1,
                source: LunarSource::Table,
            });
        }
        remaining -= len;
    }
    None
}
