use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// Days per week that count as earning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WorkWeek {
    #[default]
    SevenDays,
    FiveDays,
}

impl WorkWeek {
    pub fn days(&self) -> u32 {
        match self {
            Self::SevenDays => 7,
            Self::FiveDays => 5,
        }
    }

    pub fn includes_weekends(&self) -> bool {
        matches!(self, Self::SevenDays)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "7 Days",
            Self::FiveDays => "5 Days",
        }
    }

    /// Accepts `7` or `5`, optionally suffixed with `d`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().trim_end_matches(['d', 'D']) {
            "7" => Some(Self::SevenDays),
            "5" => Some(Self::FiveDays),
            _ => None,
        }
    }
}

impl TryFrom<u32> for WorkWeek {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::SevenDays),
            5 => Ok(Self::FiveDays),
            other => Err(format!("work week must be 7 or 5 days, got {other}")),
        }
    }
}

impl From<WorkWeek> for u32 {
    fn from(week: WorkWeek) -> Self {
        week.days()
    }
}

/// Length of the earning day.
///
/// Shorter days are anchored at 09:00 local time when computing daily progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum HoursPerDay {
    #[default]
    TwentyFour,
    Nine,
    Eight,
}

impl HoursPerDay {
    pub fn hours(&self) -> u32 {
        match self {
            Self::TwentyFour => 24,
            Self::Nine => 9,
            Self::Eight => 8,
        }
    }

    pub fn is_full_day(&self) -> bool {
        matches!(self, Self::TwentyFour)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwentyFour => "24 Hours",
            Self::Nine => "9 Hours",
            Self::Eight => "8 Hours",
        }
    }

    /// Accepts `24`, `9` or `8`, optionally suffixed with `h`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().trim_end_matches(['h', 'H']) {
            "24" => Some(Self::TwentyFour),
            "9" => Some(Self::Nine),
            "8" => Some(Self::Eight),
            _ => None,
        }
    }
}

impl TryFrom<u32> for HoursPerDay {
    type Error = String;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        match hours {
            24 => Ok(Self::TwentyFour),
            9 => Ok(Self::Nine),
            8 => Ok(Self::Eight),
            other => Err(format!("hours per day must be 24, 9 or 8, got {other}")),
        }
    }
}

impl From<HoursPerDay> for u32 {
    fn from(hours: HoursPerDay) -> Self {
        hours.hours()
    }
}

/// Inputs every derived rate and percentage is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Gross income per month. Zero or negative means "not configured".
    pub monthly_income: Decimal,
    pub work_week: WorkWeek,
    pub hours_per_day: HoursPerDay,
    pub currency: CurrencyCode,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            monthly_income: Decimal::from(5000),
            work_week: WorkWeek::default(),
            hours_per_day: HoursPerDay::default(),
            currency: CurrencyCode::default(),
        }
    }
}

impl ScheduleConfig {
    pub fn includes_weekends(&self) -> bool {
        self.work_week.includes_weekends()
    }

    pub fn is_configured(&self) -> bool {
        self.monthly_income > Decimal::ZERO
    }

    /// Monthly income times twelve, or `None` on overflow.
    pub fn annual_income(&self) -> Option<Decimal> {
        self.monthly_income.checked_mul(Decimal::from(12))
    }
}
