//! The earnings tracker: one owner for the schedule, its derived rates, the
//! session counter and the year-to-date total.
//!
//! Derived values are recomputed explicitly whenever a setter changes the
//! schedule. Progress percentages are never cached; [`EarningsTracker::progress`]
//! recomputes them from the clock on every call.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculations::{base_ytd, calculate_progress, calculate_rates};
use crate::{
    Clock, CurrencyCode, HoursPerDay, Progress, Rates, ScheduleConfig, SessionError,
    SessionState, SystemClock, WorkWeek,
};

#[derive(Debug)]
pub struct EarningsTracker<C: Clock = SystemClock> {
    clock: C,
    config: ScheduleConfig,
    rates: Rates,
    session: SessionState,
    ytd: Decimal,
}

impl EarningsTracker<SystemClock> {
    /// Creates a tracker reading the host clock.
    pub fn with_system_clock(config: ScheduleConfig) -> Self {
        Self::new(config, SystemClock)
    }
}

impl<C: Clock> EarningsTracker<C> {
    pub fn new(
        config: ScheduleConfig,
        clock: C,
    ) -> Self {
        let mut tracker = Self {
            clock,
            config,
            rates: Rates::default(),
            session: SessionState::new(),
            ytd: Decimal::ZERO,
        };
        tracker.recompute();
        tracker
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn session_earned(&self) -> Decimal {
        self.session.earned()
    }

    /// Year-to-date earnings including anything accrued by the session.
    pub fn ytd(&self) -> Decimal {
        self.ytd
    }

    /// Goal progress at the clock's current time.
    pub fn progress(&self) -> Progress {
        calculate_progress(self.clock.local_now(), &self.config, &self.rates, self.ytd)
    }

    /// Replaces the whole schedule.
    ///
    /// Rejected while running. Rates and the YTD base are recomputed when
    /// anything that feeds them changed; a currency-only change keeps them.
    pub fn update_config(
        &mut self,
        config: ScheduleConfig,
    ) -> Result<(), SessionError> {
        if self.session.is_running() {
            warn!("settings change rejected while running");
            return Err(SessionError::ConfigLocked);
        }
        if config == self.config {
            return Ok(());
        }

        let rates_changed = config.monthly_income != self.config.monthly_income
            || config.work_week != self.config.work_week
            || config.hours_per_day != self.config.hours_per_day;

        info!(
            income = %config.monthly_income,
            days = config.work_week.days(),
            hours = config.hours_per_day.hours(),
            currency = %config.currency,
            "schedule updated"
        );
        self.config = config;

        if rates_changed {
            self.recompute();
        }
        Ok(())
    }

    pub fn set_monthly_income(
        &mut self,
        monthly_income: Decimal,
    ) -> Result<(), SessionError> {
        self.update_config(ScheduleConfig {
            monthly_income,
            ..self.config.clone()
        })
    }

    pub fn set_work_week(
        &mut self,
        work_week: WorkWeek,
    ) -> Result<(), SessionError> {
        self.update_config(ScheduleConfig {
            work_week,
            ..self.config.clone()
        })
    }

    pub fn set_hours_per_day(
        &mut self,
        hours_per_day: HoursPerDay,
    ) -> Result<(), SessionError> {
        self.update_config(ScheduleConfig {
            hours_per_day,
            ..self.config.clone()
        })
    }

    pub fn set_currency(
        &mut self,
        currency: CurrencyCode,
    ) -> Result<(), SessionError> {
        self.update_config(ScheduleConfig {
            currency,
            ..self.config.clone()
        })
    }

    /// Starts the session counter. Fails when the rates are zero.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.session.start(self.clock.utc_now(), &self.rates)
    }

    /// Stops the session counter, first accruing the time since the last
    /// tick so a stop between ticks loses nothing.
    pub fn stop(&mut self) {
        if self.session.is_running() {
            self.tick();
        }
        self.session.stop();
    }

    /// Starts when stopped and stops when running. Returns the new running state.
    pub fn toggle(&mut self) -> Result<bool, SessionError> {
        if self.session.is_running() {
            self.stop();
        } else {
            self.start()?;
        }
        Ok(self.session.is_running())
    }

    /// Stops the counter and zeroes the session total. YTD keeps its value.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Accrues the time since the previous tick into both the session and
    /// the YTD total, returning the increment.
    pub fn tick(&mut self) -> Decimal {
        let increment = self.session.tick(self.clock.utc_now(), &self.rates);
        self.ytd = self.ytd.saturating_add(increment);
        increment
    }

    fn recompute(&mut self) {
        self.rates = calculate_rates(&self.config);
        self.ytd = base_ytd(self.clock.local_now(), &self.config, &self.rates);
        debug!(per_second = %self.rates.per_second, ytd = %self.ytd, "derived values recomputed");
    }
}
