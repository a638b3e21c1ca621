//! The session timer.
//!
//! At most one interval exists at a time. Stopping drops it, so once
//! [`Ticker::stop`] returns no further tick can be observed.

use std::{future, time::Duration};

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Fixed period between accrual steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Arms the timer. A second call while armed keeps the existing interval.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // A fresh interval fires immediately; the first accrual is one period out.
        timer.reset();
        self.interval = Some(timer);
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Waits for the next tick, or forever while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn start_is_idempotent() {
        let mut ticker = Ticker::default();

        ticker.start();
        ticker.start();

        assert!(ticker.is_active());
    }

    #[tokio::test]
    async fn stop_disarms() {
        let mut ticker = Ticker::default();
        ticker.start();

        ticker.stop();

        assert!(!ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.start();
        let started = tokio::time::Instant::now();

        ticker.tick().await;
        ticker.tick().await;

        assert_eq!(started.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_ticker_never_fires() {
        let mut ticker = Ticker::default();
        ticker.start();
        ticker.stop();

        let fired = tokio::time::timeout(Duration::from_secs(5), ticker.tick()).await;

        assert!(fired.is_err());
    }
}
