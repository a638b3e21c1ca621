//! Text dashboard for the earnings tracker.

use std::fmt::Write;

use earn_core::{Clock, CurrencyCode, EarningsTracker, HoursPerDay, Progress, Rates, WorkWeek};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::status_bar::{build_status_bar, hints};
use crate::format::{SESSION_FRACTION_DIGITS, format_money, format_money_with_digits, format_percent};

/// Width of a progress bar, excluding the brackets.
pub const BAR_WIDTH: usize = 30;

/// Everything the dashboard shows, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub currency: CurrencyCode,
    pub monthly_income: Decimal,
    pub work_week: WorkWeek,
    pub hours_per_day: HoursPerDay,
    pub running: bool,
    pub ytd: Decimal,
    pub session: Decimal,
    pub progress: Progress,
    pub rates: Rates,
}

impl Dashboard {
    pub fn capture<C: Clock>(tracker: &EarningsTracker<C>) -> Self {
        let config = tracker.config();
        Self {
            currency: config.currency,
            monthly_income: config.monthly_income,
            work_week: config.work_week,
            hours_per_day: config.hours_per_day,
            running: tracker.is_running(),
            ytd: tracker.ytd(),
            session: tracker.session_earned(),
            progress: tracker.progress(),
            rates: *tracker.rates(),
        }
    }

    pub fn render(&self) -> String {
        let money = |amount| format_money(amount, self.currency);
        let mut out = String::new();

        let _ = writeln!(out, "Salary Counter");
        let _ = writeln!(out);
        let _ = writeln!(out, "Year-to-Date Earnings  {}", money(self.ytd));
        let _ = writeln!(out, "Session Earnings       {}  [{}]", self.session_text(), self.state_label());
        let _ = writeln!(out);

        for (label, value) in [
            ("Daily Goal", self.progress.daily),
            ("Monthly Goal", self.progress.monthly),
            ("Yearly Goal", self.progress.yearly),
        ] {
            let _ = writeln!(out, "{label}: {}", format_percent(value));
            let _ = writeln!(out, "{}", progress_bar(value, BAR_WIDTH));
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Per Day:    {}", money(self.rates.per_day));
        let _ = writeln!(out, "Per Hour:   {}", money(self.rates.per_hour));
        let _ = writeln!(out, "Per Minute: {}", money(self.rates.per_minute));
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "Monthly Income {} | Work Week {} | Work Hours {} | Currency {}",
            money(self.monthly_income),
            self.work_week.label(),
            self.hours_per_day.label(),
            self.currency
        );
        let _ = write!(out, "{}", build_status_bar(&hints::DASHBOARD));
        out
    }

    /// Single line refreshed on every tick while running.
    pub fn status_line(&self) -> String {
        format!(
            "Session {} | YTD {} | Daily {}",
            self.session_text(),
            format_money(self.ytd, self.currency),
            format_percent(self.progress.daily)
        )
    }

    fn session_text(&self) -> String {
        format_money_with_digits(self.session, self.currency, SESSION_FRACTION_DIGITS)
    }

    fn state_label(&self) -> &'static str {
        if self.running { "running" } else { "stopped" }
    }
}

/// Draws `percent` as a bar of `width` cells, clamped to 0..=100.
pub fn progress_bar(
    percent: Decimal,
    width: usize,
) -> String {
    let clamped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(width);

    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
