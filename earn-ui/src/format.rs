//! Money and percentage formatting.
//!
//! Follows the fixed `en-US` convention regardless of the host locale:
//! currency prefix, comma thousands separators, a `.` decimal point and
//! half-away-from-zero rounding.

use earn_core::CurrencyCode;
use earn_core::calculations::common::round_half_up;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits shown on the session counter.
pub const SESSION_FRACTION_DIGITS: u32 = 6;

/// Formats `amount` with the currency's usual number of fractional digits.
pub fn format_money(
    amount: Decimal,
    currency: CurrencyCode,
) -> String {
    format_money_with_digits(amount, currency, currency.minor_digits())
}

/// Formats `amount` with exactly `digits` fractional digits.
pub fn format_money_with_digits(
    amount: Decimal,
    currency: CurrencyCode,
    digits: u32,
) -> String {
    let mut rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(digits);

    let text = rounded.to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a percentage with two decimals, e.g. `"12.50%"`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    format!("{rounded}%")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn usd_uses_dollar_sign_and_two_digits() {
        assert_eq!(format_money(dec!(1234.5), CurrencyCode::Usd), "$1,234.50");
    }

    #[test]
    fn code_prefixed_currency() {
        assert_eq!(format_money(dec!(164.271047), CurrencyCode::Sgd), "SGD 164.27");
    }

    #[test]
    fn zero_digit_currency_rounds_to_whole_units() {
        assert_eq!(format_money(dec!(1234567.5), CurrencyCode::Jpy), "¥1,234,568");
    }

    #[test]
    fn session_digits_override_currency_default() {
        let result = format_money_with_digits(dec!(0.0190128527), CurrencyCode::Krw, SESSION_FRACTION_DIGITS);

        assert_eq!(result, "₩0.019013");
    }

    #[test]
    fn pads_missing_fraction_digits() {
        assert_eq!(format_money_with_digits(dec!(5), CurrencyCode::Eur, 6), "€5.000000");
    }

    #[test]
    fn negative_amounts_put_sign_before_symbol() {
        assert_eq!(format_money(dec!(-1000), CurrencyCode::Gbp), "-£1,000.00");
    }

    #[test]
    fn rounding_to_zero_drops_sign() {
        assert_eq!(format_money(dec!(-0.001), CurrencyCode::Usd), "$0.00");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(dec!(12.5)), "12.50%");
        assert_eq!(format_percent(dec!(100)), "100.00%");
        assert_eq!(format_percent(dec!(33.33333)), "33.33%");
    }
}
