//! Stateful engine: configuration plus the daily almanac cache.

use std::path::Path;

use chrono::NaiveDate;
use ganzhi_almanac::{CacheStats, Clock, DailyDivinationRecord, DivinationCache, SystemClock};
use ganzhi_base::{Gender, PeachPeriod, peach_periods_with};
use ganzhi_config::{ConfigError, EngineConfig};

/// Owns the resolved config and a per-day almanac cache.
///
/// Methods that touch the cache take `&mut self`. Wrap the engine in a
/// `Mutex` to share it between threads.
#[derive(Debug)]
pub struct Engine<C: Clock = SystemClock> {
    config: EngineConfig,
    cache: DivinationCache<C>,
}

impl Engine<SystemClock> {
    /// Engine on the local wall clock.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }

    /// Engine configured from a TOML file.
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        Self::new(ganzhi_config::load(path)?)
    }
}

impl<C: Clock> Engine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cache: DivinationCache::new(clock),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        self.cache.clock()
    }

    /// Cached almanac record for `date`.
    pub fn daily_divination(&mut self, date: NaiveDate) -> &DailyDivinationRecord {
        self.cache.record_for(date)
    }

    /// Cached almanac record for the clock's current date.
    pub fn today(&mut self) -> &DailyDivinationRecord {
        self.cache.today()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Peach-blossom periods over the configured age range and threshold.
    pub fn peach_periods(
        &self,
        birth_year: i32,
        birth_month: u32,
        birth_day: u32,
        gender: Gender,
    ) -> Vec<PeachPeriod> {
        peach_periods_with(birth_year, birth_month, birth_day, gender, &self.config.peach)
    }
}
