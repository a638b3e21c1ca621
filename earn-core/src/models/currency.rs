use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO-4217 codes the counter can display earnings in.
///
/// The amounts are never converted; the code only selects the symbol and
/// the number of minor-unit digits used when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Aud,
    Cad,
    Chf,
    Cny,
    Eur,
    Gbp,
    Hkd,
    Idr,
    Inr,
    Jpy,
    Krw,
    Myr,
    Php,
    #[default]
    Sgd,
    Thb,
    Twd,
    Usd,
    Vnd,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 18] = [
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Eur,
        Self::Gbp,
        Self::Hkd,
        Self::Idr,
        Self::Inr,
        Self::Jpy,
        Self::Krw,
        Self::Myr,
        Self::Php,
        Self::Sgd,
        Self::Thb,
        Self::Twd,
        Self::Usd,
        Self::Vnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Hkd => "HKD",
            Self::Idr => "IDR",
            Self::Inr => "INR",
            Self::Jpy => "JPY",
            Self::Krw => "KRW",
            Self::Myr => "MYR",
            Self::Php => "PHP",
            Self::Sgd => "SGD",
            Self::Thb => "THB",
            Self::Twd => "TWD",
            Self::Usd => "USD",
            Self::Vnd => "VND",
        }
    }

    /// Case-insensitive lookup of a code from the supported set.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
    }

    /// Prefix used by the `en-US` currency convention.
    ///
    /// Codes without a dedicated symbol in that locale are written as the
    /// code followed by a space.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Aud => "A$",
            Self::Cad => "CA$",
            Self::Chf => "CHF ",
            Self::Cny => "CN¥",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Hkd => "HK$",
            Self::Idr => "IDR ",
            Self::Inr => "₹",
            Self::Jpy => "¥",
            Self::Krw => "₩",
            Self::Myr => "MYR ",
            Self::Php => "₱",
            Self::Sgd => "SGD ",
            Self::Thb => "THB ",
            Self::Twd => "NT$",
            Self::Usd => "$",
            Self::Vnd => "₫",
        }
    }

    /// Default number of fractional digits shown for this currency.
    pub fn minor_digits(&self) -> u32 {
        match self {
            Self::Jpy | Self::Krw | Self::Vnd => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_every_supported_code() {
        for code in CurrencyCode::ALL {
            assert_eq!(CurrencyCode::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(CurrencyCode::parse(" usd "), Some(CurrencyCode::Usd));
        assert_eq!(CurrencyCode::parse("Jpy"), Some(CurrencyCode::Jpy));
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(CurrencyCode::parse("BTC"), None);
        assert_eq!(CurrencyCode::parse(""), None);
    }

    #[test]
    fn default_is_sgd() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::Sgd);
    }

    #[test]
    fn zero_decimal_currencies() {
        assert_eq!(CurrencyCode::Jpy.minor_digits(), 0);
        assert_eq!(CurrencyCode::Krw.minor_digits(), 0);
        assert_eq!(CurrencyCode::Vnd.minor_digits(), 0);
        assert_eq!(CurrencyCode::Usd.minor_digits(), 2);
    }
}
