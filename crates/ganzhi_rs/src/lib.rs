//! Convenience facade for the ganzhi almanac engine.
//!
//! Pure calculations are available as free functions; the cached daily
//! almanac lives on [`Engine`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! let chart = compute_chart(1990, 1, 1, Some(12));
//! println!("{chart}");                                   // 庚午 戊寅 乙酉 壬午
//! let analysis = analyze_elements(&chart);
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//! let today = engine.today();
//! println!("{} 冲{}", today.day_pillar, today.clash.name());
//! ```

pub mod convenience;
pub mod engine;

pub use convenience::{
    chart_for_date, elements_for_date, lunar_date, lunar_label, zodiac_from_name,
};
pub use engine::Engine;

// Pure calculations, so callers need only this crate.
pub use ganzhi_base::{
    ALL_ZODIACS, Branch, Chart, CompatibilityResult, Element, ElementAnalysis, ElementTally,
    GanzhiError, Gender, LunarDate, LunarOutOfRange, LunarSource, PeachKind, PeachPeriod,
    PeachScanConfig, Pillar, Relation, Stem, Strength, SubScores, Tier, Zodiac, analyze_elements,
    compatibility, compute_chart, peach_periods, zodiac_for_year, zodiac_score,
};

pub use ganzhi_almanac::{
    Activity, CacheStats, Clock, DailyDivinationRecord, Deity, Direction, DivinationCache,
    HourFortune, ManualClock, SystemClock, daily_divination,
};

pub use ganzhi_config::{ConfigError, EngineConfig};
