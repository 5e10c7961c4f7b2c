//! Pillars (stem-branch pairs) and the four-pillar chart.
//!
//! The chart rules here are deliberately simplified linear formulas:
//! - Year:  stem[(y-4) mod 10], branch[(y-4) mod 12]
//! - Month: stem[(12y + m + 3) mod 10], branch[(m+1) mod 12] (no solar terms)
//! - Day:   n = 365y + 30m + d; stem[n mod 10], branch[n mod 12]
//! - Hour:  branch[((h+1)/2) mod 12], stem[(2*day_stem + hour_branch) mod 10]
//!
//! The day rule is not the calendrically exact day pillar; the almanac uses a
//! separate epoch-based rule. The two can disagree for the same date.

use crate::branch::Branch;
use crate::error::GanzhiError;
use crate::stem::Stem;
use crate::zodiac::Zodiac;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: i64 = 60;

/// One stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `n` of the 60-term cycle (0 = 甲子), reduced mod 60.
    pub fn from_cycle_index(n: i64) -> Self {
        let n = n.rem_euclid(CYCLE_LEN);
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// 0-based position in the 60-term cycle.
    ///
    /// Only same-parity pairs occur in the cycle; every pillar produced by
    /// this crate satisfies that.
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN) as u8
    }

    /// Two-character name, e.g. `甲子`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Four-pillar chart. The hour pillar is present only when an hour was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl Chart {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> impl Iterator<Item = Pillar> + '_ {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .into_iter()
            .flatten()
    }

    /// Zodiac animal of the year pillar.
    pub fn zodiac(&self) -> Zodiac {
        self.year.branch.zodiac()
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.year, self.month, self.day)?;
        if let Some(hour) = self.hour {
            write!(f, " {hour}")?;
        }
        Ok(())
    }
}

/// Year pillar: offset 4 aligns 甲子 with CE 4 (and 1984).
pub fn year_pillar(year: i32) -> Pillar {
    let n = year as i64 - 4;
    Pillar::new(Stem::from_index(n), Branch::from_index(n))
}

/// Simplified month pillar; ignores solar-term boundaries.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let y = year as i64;
    let m = month as i64;
    Pillar::new(Stem::from_index(y * 12 + m + 3), Branch::from_index(m + 1))
}

/// Simplified linear-count day pillar.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let n = year as i64 * 365 + month as i64 * 30 + day as i64;
    Pillar::new(Stem::from_index(n), Branch::from_index(n))
}

/// Hour pillar. Each branch spans two hours; 23:00-00:59 maps to 子.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = Branch::from_index((hour as i64 + 1) / 2);
    let stem = Stem::from_index(day_stem.index() as i64 * 2 + branch.index() as i64);
    Pillar::new(stem, branch)
}

/// Compute the four-pillar chart.
///
/// Never panics: out-of-domain integers still produce a chart through the
/// same modular arithmetic, with no calendrical meaning.
pub fn compute_chart(year: i32, month: u32, day: u32, hour: Option<u32>) -> Chart {
    let day_p = day_pillar(year, month, day);
    Chart {
        year: year_pillar(year),
        month: month_pillar(year, month),
        day: day_p,
        hour: hour.map(|h| hour_pillar(day_p.stem, h)),
    }
}

/// [`compute_chart`] with domain checks on month, day and hour.
pub fn try_compute_chart(
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
) -> Result<Chart, GanzhiError> {
    if !(1..=12).contains(&month) {
        return Err(GanzhiError::InvalidInput("month must be 1..=12"));
    }
    if !(1..=31).contains(&day) {
        return Err(GanzhiError::InvalidInput("day must be 1..=31"));
    }
    if hour.is_some_and(|h| h > 23) {
        return Err(GanzhiError::InvalidInput("hour must be 0..=23"));
    }
    Ok(compute_chart(year, month, day, hour))
}
