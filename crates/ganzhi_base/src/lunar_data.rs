//! Month-length tables for the hardcoded lunar reference years.
//!
//! Each table starts at the lunar new year (first day of 正月) and lists the
//! months in order, including any leap month right after the month it repeats.
//! Dates are the Beijing-time new moons for that year.

/// One month entry of a reference-year table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthSpec {
    /// Month number 1..=12.
    pub month: u8,
    /// True for the intercalary copy of `month`.
    pub leap: bool,
    /// Length in days (29 or 30).
    pub days: u8,
}

const fn m(month: u8, days: u8) -> LunarMonthSpec {
    LunarMonthSpec {
        month,
        leap: false,
        days,
    }
}

const fn leap(month: u8, days: u8) -> LunarMonthSpec {
    LunarMonthSpec {
        month,
        leap: true,
        days,
    }
}

/// A hardcoded lunar reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceYear {
    /// Gregorian year in which the lunar year begins.
    pub year: i32,
    /// Gregorian (month, day) of the lunar new year.
    pub epoch: (u32, u32),
    pub months: &'static [LunarMonthSpec],
}

impl ReferenceYear {
    /// Sum of all declared month lengths.
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.days as u32).sum()
    }

    /// The leap month entry, if the year has one.
    pub fn leap_month(&self) -> Option<&LunarMonthSpec> {
        self.months.iter().find(|m| m.leap)
    }
}

/// 甲辰 year: 2024-02-10 .. 2025-01-28, 354 days.
const YEAR_2024: [LunarMonthSpec; 12] = [
    m(1, 29),
    m(2, 30),
    m(3, 29),
    m(4, 29),
    m(5, 30),
    m(6, 29),
    m(7, 30),
    m(8, 30),
    m(9, 29),
    m(10, 30),
    m(11, 30),
    m(12, 29),
];

/// 乙巳 year: 2025-01-29 .. 2026-02-16, 384 days with leap sixth month.
const YEAR_2025: [LunarMonthSpec; 13] = [
    m(1, 30),
    m(2, 29),
    m(3, 30),
    m(4, 29),
    m(5, 29),
    m(6, 30),
    leap(6, 29),
    m(7, 30),
    m(8, 29),
    m(9, 30),
    m(10, 30),
    m(11, 30),
    m(12, 29),
];

/// All reference years, ascending.
pub const REFERENCE_YEARS: [ReferenceYear; 2] = [
    ReferenceYear {
        year: 2024,
        epoch: (2, 10),
        months: &YEAR_2024,
    },
    ReferenceYear {
        year: 2025,
        epoch: (1, 29),
        months: &YEAR_2025,
    },
];

/// Reference table whose lunar year begins in Gregorian `year`.
pub fn reference_year(year: i32) -> Option<&'static ReferenceYear> {
    REFERENCE_YEARS.iter().find(|r| r.year == year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2024_has_354_days() {
        let r = reference_year(2024).unwrap();
        assert_eq!(r.total_days(), 354);
        assert!(r.leap_month().is_none());
        assert_eq!(r.months.len(), 12);
    }

    #[test]
    fn year_2025_has_384_days_with_one_29_day_leap() {
        let r = reference_year(2025).unwrap();
        assert_eq!(r.total_days(), 384);
        assert_eq!(r.months.len(), 13);
        let leaps: Vec<_> = r.months.iter().filter(|m| m.leap).collect();
        assert_eq!(leaps.len(), 1);
        assert_eq!(leaps[0].month, 6);
        assert_eq!(leaps[0].days, 29);
    }

    #[test]
    fn month_lengths_are_29_or_30() {
        for r in REFERENCE_YEARS {
            for spec in r.months {
                assert!(spec.days == 29 || spec.days == 30, "{spec:?}");
                assert!((1..=12).contains(&spec.month));
            }
        }
    }

    #[test]
    fn common_months_in_order() {
        for r in REFERENCE_YEARS {
            let common: Vec<u8> = r.months.iter().filter(|m| !m.leap).map(|m| m.month).collect();
            assert_eq!(common, (1..=12).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn unknown_year() {
        assert!(reference_year(2023).is_none());
    }
}
