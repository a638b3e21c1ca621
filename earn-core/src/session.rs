//! Session counter state machine.
//!
//! ```text
//!            start (rates > 0)
//!   STOPPED ------------------> RUNNING ──┐
//!      ^                          │       │ tick: earned += Δt × per_second
//!      └──────── stop / reset ────┘  <────┘
//! ```
//!
//! The counter only accrues between ticks while running. Totals are frozen
//! as soon as it stops.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::Rates;
use crate::calculations::common::duration_seconds;

/// Errors raised by session and configuration actions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The counter cannot start because nothing would accrue.
    #[error("Please enter a valid monthly income.")]
    NotConfigured,

    /// Settings are locked while the counter runs.
    #[error("stop the counter before changing settings")]
    ConfigLocked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    running: bool,
    earned: Decimal,
    last_tick: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Amount accrued since the last reset.
    pub fn earned(&self) -> Decimal {
        self.earned
    }

    pub fn last_tick(&self) -> Option<DateTime<Utc>> {
        self.last_tick
    }

    /// Starts accruing from `now`.
    ///
    /// Starting an already running session is a no-op so a repeated start
    /// never restarts the measurement window.
    pub fn start(
        &mut self,
        now: DateTime<Utc>,
        rates: &Rates,
    ) -> Result<(), SessionError> {
        if self.running {
            debug!("session already running");
            return Ok(());
        }
        if rates.is_zero() {
            return Err(SessionError::NotConfigured);
        }

        self.running = true;
        self.last_tick = Some(now);
        info!(earned = %self.earned, "session started");
        Ok(())
    }

    /// Accrues the time since the previous tick and returns the increment.
    ///
    /// Returns zero while stopped. A clock that moved backwards accrues
    /// nothing but still moves the measurement window forward.
    pub fn tick(
        &mut self,
        now: DateTime<Utc>,
        rates: &Rates,
    ) -> Decimal {
        if !self.running {
            return Decimal::ZERO;
        }

        let previous = self.last_tick.replace(now).unwrap_or(now);
        let increment = duration_seconds(now - previous)
            .checked_mul(rates.per_second)
            .unwrap_or(Decimal::ZERO);

        self.earned = self.earned.saturating_add(increment);
        increment
    }

    pub fn stop(&mut self) {
        if self.running {
            info!(earned = %self.earned, "session stopped");
        }
        self.running = false;
        self.last_tick = None;
    }

    /// Stops the counter and zeroes the session total.
    pub fn reset(&mut self) {
        self.stop();
        self.earned = Decimal::ZERO;
        debug!("session reset");
    }
}
