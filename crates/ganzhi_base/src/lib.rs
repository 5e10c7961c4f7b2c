//! Sexagenary cycle tables and the pure calculations built on them.
//!
//! This crate provides:
//! - Stem, branch, element and zodiac tables with their fixed relations
//! - Four-pillar charts from a Gregorian date and optional hour
//! - Five-element balance and day-master strength
//! - Lunar month/day labels for the reference years, with a coarse fallback
//! - Seeded, reproducible pseudo-random values
//! - Zodiac compatibility and peach-blossom period scoring
//!
//! Everything here is a pure function of its inputs.

pub mod branch;
pub mod compatibility;
pub mod date;
pub mod element;
pub mod error;
pub mod five_element;
pub mod lunar;
pub mod lunar_data;
pub mod peach;
pub mod pillar;
pub mod seeded;
pub mod stem;
pub mod zodiac;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch, Triad};
pub use compatibility::{
    CompatibilityResult, Relation, SubScores, Tier, compatibility, relation, zodiac_score,
};
pub use date::civil_date;
pub use element::{ALL_ELEMENTS, Element};
pub use error::GanzhiError;
pub use five_element::{ElementAnalysis, ElementTally, Strength, analyze_elements, tally_elements};
pub use lunar::{
    LunarDate, LunarOutOfRange, LunarSource, approximate_lunar_date, day_name, lunar_date,
    lunar_label, month_name,
};
pub use lunar_data::{LunarMonthSpec, REFERENCE_YEARS, ReferenceYear, reference_year};
pub use peach::{
    Gender, PeachKind, PeachPeriod, PeachScanConfig, peach_branch, peach_periods,
    peach_periods_with, peach_strength,
};
pub use pillar::{
    CYCLE_LEN, Chart, Pillar, compute_chart, day_pillar, hour_pillar, month_pillar,
    try_compute_chart, year_pillar,
};
pub use seeded::{date_seed, deterministic_int, deterministic_slice, pair_seed, seeded_random};
pub use stem::{ALL_STEMS, Polarity, STEM_COUNT, Stem};
pub use zodiac::{ALL_ZODIACS, Zodiac, zodiac_for_year};
