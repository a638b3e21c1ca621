//! Pay-rate derivation.
//!
//! Turns a monthly income and a work schedule into per-second, per-minute,
//! per-hour and per-day rates.
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Annual income = monthly income × 12 |
//! | 2    | Earning days per year = 365.25 (7-day week) or 260 (5-day week) |
//! | 3    | Earning seconds per year = days × hours per day × 3600 |
//! | 4    | Per second = annual income / earning seconds |
//! | 5    | Per minute = per second × 60, per hour = per minute × 60 |
//! | 6    | Per day = per hour × hours per day |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use earn_core::calculations::calculate_rates;
//! use earn_core::{HoursPerDay, ScheduleConfig, WorkWeek};
//!
//! let config = ScheduleConfig {
//!     monthly_income: dec!(5000),
//!     work_week: WorkWeek::SevenDays,
//!     hours_per_day: HoursPerDay::TwentyFour,
//!     ..Default::default()
//! };
//!
//! let rates = calculate_rates(&config);
//!
//! assert_eq!(rates.per_second.round_dp(7), dec!(0.0019013));
//! assert_eq!(rates.per_day.round_dp(2), dec!(164.27));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{Rates, ScheduleConfig, WorkWeek};

/// Calendar days per year, averaged over leap years.
pub const DAYS_IN_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// 52 weeks of 5 working days.
pub const WORK_DAYS_IN_YEAR: Decimal = Decimal::from_parts(260, 0, 0, false, 0);

pub const SECONDS_PER_MINUTE: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
pub const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// Number of days per year that count as earning days for the given week.
pub fn effective_days_per_year(work_week: WorkWeek) -> Decimal {
    if work_week.includes_weekends() {
        DAYS_IN_YEAR
    } else {
        WORK_DAYS_IN_YEAR
    }
}

/// Derives every pay rate from `config`.
///
/// A non-positive income yields all-zero rates rather than an error; so does
/// an income large enough to overflow the decimal arithmetic.
pub fn calculate_rates(config: &ScheduleConfig) -> Rates {
    if !config.is_configured() {
        debug!(income = %config.monthly_income, "income not configured, rates are zero");
        return Rates::default();
    }

    match derive_rates(config) {
        Some(rates) => {
            debug!(per_second = %rates.per_second, per_day = %rates.per_day, "rates derived");
            rates
        }
        None => {
            warn!(income = %config.monthly_income, "rate derivation overflowed, rates are zero");
            Rates::default()
        }
    }
}

fn derive_rates(config: &ScheduleConfig) -> Option<Rates> {
    let hours = Decimal::from(config.hours_per_day.hours());
    let annual_income = config.annual_income()?;
    let earning_seconds = effective_days_per_year(config.work_week)
        .checked_mul(hours)?
        .checked_mul(SECONDS_PER_HOUR)?;

    if earning_seconds.is_zero() {
        return Some(Rates::default());
    }

    let per_second = annual_income.checked_div(earning_seconds)?;
    let per_minute = per_second.checked_mul(SECONDS_PER_MINUTE)?;
    let per_hour = per_minute.checked_mul(MINUTES_PER_HOUR)?;
    let per_day = per_hour.checked_mul(hours)?;

    Some(Rates {
        per_second,
        per_minute,
        per_hour,
        per_day,
    })
}
