//! Year-to-date earnings and goal progress.
//!
//! Every function here is a pure function of the local wall-clock time and
//! the current schedule. Calendar boundaries (midnight, the first of the
//! month, January 1st) are taken in local time, represented as
//! [`NaiveDateTime`].
//!
//! Elapsed calendar time is scaled to *effective seconds*: the share of
//! wall-clock time that counts as earning time under the active schedule.
//! A 5-day week keeps `260 / 365.25` of the time and an 8- or 9-hour day
//! keeps `hours / 24` of it.

use chrono::{Datelike, NaiveDateTime, NaiveTime, TimeDelta};
use rust_decimal::Decimal;

use crate::calculations::common::{duration_seconds, percent_of};
use crate::calculations::rates::{DAYS_IN_YEAR, SECONDS_PER_HOUR, WORK_DAYS_IN_YEAR};
use crate::{HoursPerDay, Progress, Rates, ScheduleConfig};

/// Hour of day at which 8- and 9-hour workdays begin.
pub const WORKDAY_START_HOUR: i64 = 9;

const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Midnight on January 1st of `now`'s year.
pub fn start_of_year(now: NaiveDateTime) -> NaiveDateTime {
    let date = now.date();
    date.with_ordinal(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// Midnight on the first day of `now`'s month.
pub fn start_of_month(now: NaiveDateTime) -> NaiveDateTime {
    let date = now.date();
    date.with_day(1).unwrap_or(date).and_time(NaiveTime::MIN)
}

/// Scales raw calendar seconds down to earning seconds for `config`.
pub fn effective_seconds(
    raw_seconds: Decimal,
    config: &ScheduleConfig,
) -> Decimal {
    let mut seconds = raw_seconds;

    if !config.includes_weekends() {
        seconds = seconds * WORK_DAYS_IN_YEAR / DAYS_IN_YEAR;
    }
    if !config.hours_per_day.is_full_day() {
        seconds = seconds * Decimal::from(config.hours_per_day.hours()) / HOURS_PER_DAY;
    }

    seconds
}

/// Year-to-date earnings implied by the schedule alone.
///
/// This is the base value the session counter accrues on top of. Zero when
/// nothing accrues.
pub fn base_ytd(
    now: NaiveDateTime,
    config: &ScheduleConfig,
    rates: &Rates,
) -> Decimal {
    if rates.is_zero() {
        return Decimal::ZERO;
    }

    let raw = duration_seconds(now - start_of_year(now));
    effective_seconds(raw, config)
        .checked_mul(rates.per_second)
        .unwrap_or(Decimal::ZERO)
}

/// Seconds worked so far today.
///
/// A full-day schedule counts from midnight. Shorter days run from
/// [`WORKDAY_START_HOUR`]: nothing is counted before the start and the whole
/// day is counted from the end of the window onwards.
pub fn seconds_into_workday(
    now: NaiveDateTime,
    hours_per_day: HoursPerDay,
) -> Decimal {
    let midnight = now.date().and_time(NaiveTime::MIN);

    if hours_per_day.is_full_day() {
        return duration_seconds(now - midnight);
    }

    let window = TimeDelta::hours(i64::from(hours_per_day.hours()));
    let elapsed = now - (midnight + TimeDelta::hours(WORKDAY_START_HOUR));

    if elapsed < TimeDelta::zero() {
        Decimal::ZERO
    } else if elapsed >= window {
        duration_seconds(window)
    } else {
        duration_seconds(elapsed)
    }
}

/// Daily, monthly and yearly goal completion at `now`.
///
/// `ytd` is the tracker's current year-to-date value, including anything
/// the session counter has accrued.
pub fn calculate_progress(
    now: NaiveDateTime,
    config: &ScheduleConfig,
    rates: &Rates,
    ytd: Decimal,
) -> Progress {
    if rates.is_zero() || !config.is_configured() {
        return Progress::default();
    }

    // seconds × per_second / per_day reduces to seconds / workday length,
    // which stays exact at the end of the window.
    let workday_seconds = Decimal::from(config.hours_per_day.hours()) * SECONDS_PER_HOUR;
    let daily = percent_of(seconds_into_workday(now, config.hours_per_day), workday_seconds);

    let month_seconds = effective_seconds(duration_seconds(now - start_of_month(now)), config);
    let monthly = month_seconds
        .checked_mul(rates.per_second)
        .map(|earned| percent_of(earned, config.monthly_income))
        .unwrap_or(Decimal::ZERO);

    let yearly = config
        .annual_income()
        .map(|annual| percent_of(ytd, annual))
        .unwrap_or(Decimal::ZERO);

    Progress {
        daily,
        monthly,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::WorkWeek;
    use crate::calculations::calculate_rates;

    fn at(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn schedule(
        work_week: WorkWeek,
        hours_per_day: HoursPerDay,
    ) -> ScheduleConfig {
        ScheduleConfig {
            monthly_income: dec!(5000),
            work_week,
            hours_per_day,
            ..Default::default()
        }
    }

    fn assert_close(
        actual: Decimal,
        expected: Decimal,
    ) {
        let diff = (actual - expected).abs();
        assert!(
            diff < dec!(0.0000001),
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    // =========================================================================
    // calendar boundaries
    // =========================================================================

    #[test]
    fn start_of_year_is_january_first_midnight() {
        assert_eq!(start_of_year(at(2026, 10, 17, 13, 45, 2)), at(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn start_of_month_is_first_day_midnight() {
        assert_eq!(start_of_month(at(2026, 2, 28, 23, 59, 59)), at(2026, 2, 1, 0, 0, 0));
    }

    // =========================================================================
    // effective_seconds tests
    // =========================================================================

    #[test]
    fn effective_seconds_unchanged_for_full_schedule() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);

        assert_eq!(effective_seconds(dec!(86400), &config), dec!(86400));
    }

    #[test]
    fn effective_seconds_scales_by_hours() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::Eight);

        assert_eq!(effective_seconds(dec!(86400), &config), dec!(28800));
    }

    #[test]
    fn effective_seconds_scales_by_work_week() {
        let config = schedule(WorkWeek::FiveDays, HoursPerDay::TwentyFour);

        // 365.25 days of calendar time hold 260 earning days
        assert_eq!(effective_seconds(dec!(36525), &config), dec!(26000));
    }

    // =========================================================================
    // base_ytd tests
    // =========================================================================

    #[test]
    fn base_ytd_is_zero_without_rates() {
        let config = ScheduleConfig {
            monthly_income: dec!(0),
            ..Default::default()
        };
        let rates = calculate_rates(&config);

        assert_eq!(base_ytd(at(2026, 6, 1, 0, 0, 0), &config, &rates), Decimal::ZERO);
    }

    #[test]
    fn base_ytd_is_zero_at_new_year() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        assert_eq!(base_ytd(at(2026, 1, 1, 0, 0, 0), &config, &rates), Decimal::ZERO);
    }

    #[test]
    fn base_ytd_after_ten_days_on_full_schedule() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        let ytd = base_ytd(at(2026, 1, 11, 0, 0, 0), &config, &rates);

        // ten days at 60000 / 365.25 per day
        assert_close(ytd, dec!(600000) / dec!(365.25));
    }

    #[test]
    fn base_ytd_same_for_every_schedule_over_the_same_time() {
        // Scaling the time and the rate cancel out: the earnings implied by
        // a stretch of calendar time depend only on the income.
        let now = at(2026, 3, 15, 12, 0, 0);
        let full = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let office = schedule(WorkWeek::FiveDays, HoursPerDay::Eight);

        let full_ytd = base_ytd(now, &full, &calculate_rates(&full));
        let office_ytd = base_ytd(now, &office, &calculate_rates(&office));

        assert_close(full_ytd, office_ytd);
    }

    // =========================================================================
    // seconds_into_workday tests
    // =========================================================================

    #[test]
    fn workday_before_start_is_zero() {
        let result = seconds_into_workday(at(2026, 10, 17, 8, 59, 59), HoursPerDay::Eight);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn workday_mid_window_counts_elapsed() {
        let result = seconds_into_workday(at(2026, 10, 17, 10, 30, 0), HoursPerDay::Nine);

        assert_eq!(result, dec!(5400));
    }

    #[test]
    fn workday_at_end_is_full_window() {
        let result = seconds_into_workday(at(2026, 10, 17, 17, 0, 0), HoursPerDay::Eight);

        assert_eq!(result, dec!(28800));
    }

    #[test]
    fn workday_after_end_stays_full() {
        let result = seconds_into_workday(at(2026, 10, 17, 23, 0, 0), HoursPerDay::Nine);

        assert_eq!(result, dec!(32400));
    }

    #[test]
    fn full_day_counts_from_midnight() {
        let result = seconds_into_workday(at(2026, 10, 17, 6, 0, 0), HoursPerDay::TwentyFour);

        assert_eq!(result, dec!(21600));
    }

    // =========================================================================
    // calculate_progress tests
    // =========================================================================

    #[test]
    fn daily_progress_is_exactly_one_hundred_at_workday_end() {
        let config = schedule(WorkWeek::FiveDays, HoursPerDay::Eight);
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 10, 16, 17, 0, 0), &config, &rates, dec!(0));

        assert_eq!(progress.daily, dec!(100));
    }

    #[test]
    fn daily_progress_is_half_at_noon_on_full_day() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 10, 16, 12, 0, 0), &config, &rates, dec!(0));

        assert_eq!(progress.daily, dec!(50));
    }

    #[test]
    fn monthly_progress_after_half_a_thirty_day_month() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 9, 16, 0, 0, 0), &config, &rates, dec!(0));

        // 15 days × (60000 / 365.25) / 5000 × 100
        assert_close(progress.monthly, dec!(15) * dec!(60000) / dec!(365.25) / dec!(50));
    }

    #[test]
    fn yearly_progress_is_ytd_over_annual_income() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 7, 1, 0, 0, 0), &config, &rates, dec!(15000));

        assert_eq!(progress.yearly, dec!(25));
    }

    #[test]
    fn progress_is_unclamped() {
        let config = schedule(WorkWeek::SevenDays, HoursPerDay::TwentyFour);
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 12, 31, 0, 0, 0), &config, &rates, dec!(90000));

        assert_eq!(progress.yearly, dec!(150));
    }

    #[test]
    fn progress_is_zero_without_income() {
        let config = ScheduleConfig {
            monthly_income: dec!(0),
            ..Default::default()
        };
        let rates = calculate_rates(&config);

        let progress = calculate_progress(at(2026, 10, 16, 12, 0, 0), &config, &rates, dec!(10));

        assert_eq!(progress, Progress::default());
    }
}
