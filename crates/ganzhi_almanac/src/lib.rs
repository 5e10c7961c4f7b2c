//! Daily almanac (黄历) for a calendar day.
//!
//! [`daily_divination`] is a pure function of the date. [`DivinationCache`]
//! memoizes the most recent day and reads "today" from an injected
//! [`Clock`].

pub mod almanac;
pub mod almanac_types;
pub mod cache;

pub use almanac::{
    ACTIVITIES_PER_LIST, JIAZI_EPOCH, almanac_day_pillar, auspicious_deities, clash_sign,
    daily_divination, inauspicious_deity, taboo_direction,
};
pub use almanac_types::{
    ALL_ACTIVITIES, Activity, DailyDivinationRecord, Deity, Direction, HourFortune,
};
pub use cache::{CacheStats, Clock, DayKey, DivinationCache, ManualClock, SystemClock};
