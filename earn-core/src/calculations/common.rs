//! Common helpers shared by the rate and progress calculations.
//!
//! Everything here works on [`Decimal`] so money values never pass through
//! binary floating point.

use chrono::TimeDelta;
use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use earn_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(99.994)), dec!(99.99));
/// assert_eq!(round_half_up(dec!(99.995)), dec!(100.00));
/// assert_eq!(round_half_up(dec!(-0.125)), dec!(-0.13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a time span into seconds with millisecond precision.
///
/// Negative spans (a clock that moved backwards) are clamped to zero.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use rust_decimal_macros::dec;
/// use earn_core::calculations::common::duration_seconds;
///
/// assert_eq!(duration_seconds(TimeDelta::milliseconds(1500)), dec!(1.5));
/// assert_eq!(duration_seconds(TimeDelta::seconds(-3)), dec!(0));
/// ```
pub fn duration_seconds(delta: TimeDelta) -> Decimal {
    let millis = delta.num_milliseconds().max(0);
    Decimal::new(millis, 3)
}

/// Returns `part / whole × 100`, or zero when `whole` is zero or the
/// division overflows.
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(12.344));

        assert_eq!(result, dec!(12.34));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(12.345));

        assert_eq!(result, dec!(12.35));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-12.345));

        assert_eq!(result, dec!(-12.35));
    }

    #[test]
    fn round_half_up_handles_long_fractions() {
        let result = round_half_up(dec!(33.333333333333333333333333));

        assert_eq!(result, dec!(33.33));
    }

    // =========================================================================
    // duration_seconds tests
    // =========================================================================

    #[test]
    fn duration_seconds_keeps_milliseconds() {
        let result = duration_seconds(TimeDelta::milliseconds(100));

        assert_eq!(result, dec!(0.1));
    }

    #[test]
    fn duration_seconds_handles_whole_days() {
        let result = duration_seconds(TimeDelta::days(1));

        assert_eq!(result, dec!(86400));
    }

    #[test]
    fn duration_seconds_clamps_negative_spans() {
        let result = duration_seconds(TimeDelta::milliseconds(-250));

        assert_eq!(result, Decimal::ZERO);
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_computes_percentage() {
        let result = percent_of(dec!(25), dec!(200));

        assert_eq!(result, dec!(12.5));
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        let result = percent_of(dec!(25), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn percent_of_may_exceed_one_hundred() {
        let result = percent_of(dec!(300), dec!(200));

        assert_eq!(result, dec!(150));
    }
}
