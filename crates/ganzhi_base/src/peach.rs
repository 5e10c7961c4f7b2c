//! Peach-blossom (romance timing) periods across a life range.
//!
//! The peach-blossom branch is fixed by the birth-year triad:
//! 申子辰 → 酉, 寅午戌 → 卯, 巳酉丑 → 午, 亥卯未 → 子.
//!
//! For each age, strength is the sum of a base, a relation bonus between the
//! calendar year's branch and the peach branch, decade / age / gender band
//! bonuses, and a small seeded fine-tune term, then clamped to [5, 98].

use crate::branch::{Branch, Triad};
use crate::error::GanzhiError;
use crate::pillar::year_pillar;
use crate::seeded::{date_seed, deterministic_int};

/// Lowest reportable strength.
pub const MIN_STRENGTH: i64 = 5;
/// Highest reportable strength.
pub const MAX_STRENGTH: i64 = 98;
/// Default first scanned age.
pub const DEFAULT_START_AGE: u32 = 18;
/// Default last scanned age (inclusive).
pub const DEFAULT_END_AGE: u32 = 58;
/// Default significance threshold.
pub const DEFAULT_THRESHOLD: u8 = 35;

const BASE_STRENGTH: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_name(s: &str) -> Option<Gender> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Kind of a peach-blossom year, from its relation to the peach branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeachKind {
    /// The year branch is the peach branch itself.
    Prime,
    /// The year branch pairs (六合) with the peach branch.
    Harmony,
    /// The year branch shares the peach branch's triad.
    Affinity,
    /// No branch relation; strength comes from bands alone.
    Minor,
}

impl PeachKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prime => "正桃花",
            Self::Harmony => "合桃花",
            Self::Affinity => "暗桃花",
            Self::Minor => "小桃花",
        }
    }

    const fn bonus(self) -> i64 {
        match self {
            Self::Prime => 40,
            Self::Harmony => 30,
            Self::Affinity => 25,
            Self::Minor => 0,
        }
    }
}

/// One scanned age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeachPeriod {
    pub age: u32,
    /// Calendar year `birth_year + age`.
    pub year: i32,
    /// Always in [5, 98].
    pub strength: u8,
    pub kind: PeachKind,
}

/// Scan range and retention threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeachScanConfig {
    pub start_age: u32,
    /// Inclusive.
    pub end_age: u32,
    /// Periods below this strength are dropped.
    pub threshold: u8,
}

impl Default for PeachScanConfig {
    fn default() -> Self {
        Self {
            start_age: DEFAULT_START_AGE,
            end_age: DEFAULT_END_AGE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl PeachScanConfig {
    /// Check that the range is non-empty and the threshold reachable.
    pub fn validate(&self) -> Result<(), GanzhiError> {
        if self.start_age > self.end_age {
            return Err(GanzhiError::InvalidInput("start_age must not exceed end_age"));
        }
        if self.threshold as i64 > MAX_STRENGTH {
            return Err(GanzhiError::InvalidInput("threshold must be at most 98"));
        }
        Ok(())
    }
}

/// Peach-blossom branch for a birth-year branch.
pub const fn peach_branch(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        Triad::Water => Branch::You,
        Triad::Fire => Branch::Mao,
        Triad::Metal => Branch::Wu,
        Triad::Wood => Branch::Zi,
    }
}

/// Relation of a year branch to the peach branch.
pub fn peach_kind(peach: Branch, year_branch: Branch) -> PeachKind {
    if year_branch == peach {
        PeachKind::Prime
    } else if year_branch.is_pair_with(peach) {
        PeachKind::Harmony
    } else if year_branch.is_triad_with(peach) {
        PeachKind::Affinity
    } else {
        PeachKind::Minor
    }
}

/// First three years of each ten-year luck cycle. The cycle phase shifts
/// with birth month and day.
fn decade_bonus(age: u32, birth_month: u32, birth_day: u32) -> i64 {
    let start = (birth_month as i64 + birth_day as i64).rem_euclid(10);
    match (age as i64 - start).rem_euclid(10) {
        0 => 10,
        1 | 2 => 5,
        _ => 0,
    }
}

fn age_band_bonus(age: u32) -> i64 {
    match age {
        18..=25 => 15,
        26..=32 => 10,
        33..=40 => 5,
        _ => 0,
    }
}

fn gender_band_bonus(age: u32, gender: Gender) -> i64 {
    match (gender, age) {
        (Gender::Male, 24..=32) => 8,
        (Gender::Female, 20..=28) => 8,
        _ => 0,
    }
}

/// Strength and kind for a single age, before thresholding.
pub fn peach_strength(
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    gender: Gender,
    age: u32,
) -> PeachPeriod {
    let peach = peach_branch(year_pillar(birth_year).branch);
    let year = birth_year.saturating_add_unsigned(age);
    let kind = peach_kind(peach, year_pillar(year).branch);

    let seed = date_seed(birth_year, birth_month, birth_day)
        .wrapping_add(age as i64 * 7)
        .wrapping_add(gender as i64);
    let raw = BASE_STRENGTH
        + kind.bonus()
        + decade_bonus(age, birth_month, birth_day)
        + age_band_bonus(age)
        + gender_band_bonus(age, gender)
        + deterministic_int(seed, -5, 5);

    PeachPeriod {
        age,
        year,
        strength: raw.clamp(MIN_STRENGTH, MAX_STRENGTH) as u8,
        kind,
    }
}

/// Significant peach-blossom periods over the configured age range.
pub fn peach_periods_with(
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    gender: Gender,
    config: &PeachScanConfig,
) -> Vec<PeachPeriod> {
    (config.start_age..=config.end_age)
        .map(|age| peach_strength(birth_year, birth_month, birth_day, gender, age))
        .filter(|p| p.strength >= config.threshold)
        .collect()
}

/// Significant peach-blossom periods for ages 18..=58 with threshold 35.
pub fn peach_periods(
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    gender: Gender,
) -> Vec<PeachPeriod> {
    peach_periods_with(
        birth_year,
        birth_month,
        birth_day,
        gender,
        &PeachScanConfig::default(),
    )
}
