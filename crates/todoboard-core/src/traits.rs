use crate::BoardResult;
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Source of the current time for everything that stamps or classifies by date.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Used in tests and replays.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Issues opaque, never-repeating identifiers.
pub trait IdGenerator {
    /// Returns a fresh id of the form `{prefix}-{suffix}`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Generates `{prefix}-{unix millis}` ids.
///
/// Two requests inside the same millisecond (or after the wall clock stepped
/// backwards) get the next unused value, so one generator never hands out the
/// same suffix twice.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start issuing suffixes strictly after `millis`.
    pub fn starting_after(millis: i64) -> Self {
        Self { last: millis }
    }

    fn next_suffix(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_suffix())
    }
}

/// A single-document snapshot store.
///
/// Implementations hold exactly one serialized `T`. `load` returns `Ok(None)`
/// when nothing has been stored yet.
pub trait StateStore<T> {
    fn load(&self) -> BoardResult<Option<T>>;
    fn save(&self, state: &T) -> BoardResult<()>;
}

impl<T, S: StateStore<T> + ?Sized> StateStore<T> for Box<S> {
    fn load(&self) -> BoardResult<Option<T>> {
        (**self).load()
    }

    fn save(&self, state: &T) -> BoardResult<()> {
        (**self).save(state)
    }
}
