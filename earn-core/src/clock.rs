use std::cell::Cell;

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc};

/// Source of the current time.
///
/// Calendar math (start of day, month and year) needs local wall-clock time,
/// while tick deltas are measured on an absolute timeline so that a change
/// of UTC offset does not register as earned time.
pub trait Clock {
    /// Local wall-clock time, used for calendar boundaries.
    fn local_now(&self) -> NaiveDateTime;

    /// Absolute time, used for measuring elapsed time between ticks.
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Local time and UTC are treated as the same timeline.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(
        &self,
        now: NaiveDateTime,
    ) {
        self.now.set(now);
    }

    /// Moves the clock by `delta`, which may be negative.
    pub fn advance(
        &self,
        delta: TimeDelta,
    ) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn local_now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.now.get().and_utc()
    }
}
