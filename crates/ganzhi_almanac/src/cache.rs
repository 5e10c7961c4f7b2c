//! Per-day memoization of almanac records.
//!
//! The cache holds exactly one record, keyed by calendar day. Asking for the
//! same day again returns the stored record; any other day replaces it.
//!
//! `DivinationCache` needs `&mut self` and is not synchronized. Hosts that
//! share one across threads wrap it in a `Mutex`.

use std::cell::Cell;

use chrono::{Datelike, Local, NaiveDate};

use crate::almanac::daily_divination;
use crate::almanac_types::DailyDivinationRecord;

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date, for tests and replay.
#[derive(Debug, Clone)]
pub struct ManualClock {
    date: Cell<NaiveDate>,
}

impl ManualClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move forward (or back, for negative `days`) by whole days.
    pub fn advance_days(&self, days: i64) {
        let current = self.date.get();
        let next = current
            .checked_add_signed(chrono::Duration::days(days))
            .unwrap_or(current);
        self.date.set(next);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

/// Cache key: the calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Counters since construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub computations: u32,
    pub hits: u32,
}

/// Single-slot almanac cache with an injected clock.
#[derive(Debug)]
pub struct DivinationCache<C: Clock = SystemClock> {
    clock: C,
    slot: Option<(DayKey, DailyDivinationRecord)>,
    stats: CacheStats,
}

impl Default for DivinationCache<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> DivinationCache<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            slot: None,
            stats: CacheStats::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Record for `date`, computed at most once while it stays in the slot.
    pub fn record_for(&mut self, date: NaiveDate) -> &DailyDivinationRecord {
        let key = DayKey::from(date);
        let (_, record) = match self.slot.take() {
            Some(entry) if entry.0 == key => {
                self.stats.hits = self.stats.hits.saturating_add(1);
                tracing::debug!(%date, "almanac cache hit");
                self.slot.insert(entry)
            }
            _ => {
                tracing::debug!(%date, "almanac cache miss");
                self.stats.computations = self.stats.computations.saturating_add(1);
                self.slot.insert((key, daily_divination(date)))
            }
        };
        record
    }

    /// Record for the clock's current date.
    pub fn today(&mut self) -> &DailyDivinationRecord {
        let date = self.clock.today();
        self.record_for(date)
    }

    /// Day currently held, if any.
    pub fn cached_date(&self) -> Option<NaiveDate> {
        self.slot.as_ref().map(|(_, record)| record.date)
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
