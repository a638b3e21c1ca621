use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay rates derived from a [`ScheduleConfig`](super::ScheduleConfig).
///
/// All four values are zero when the schedule has no valid income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rates {
    pub per_second: Decimal,
    pub per_minute: Decimal,
    pub per_hour: Decimal,
    pub per_day: Decimal,
}

impl Rates {
    /// True when nothing accrues, which blocks the session counter from starting.
    pub fn is_zero(&self) -> bool {
        self.per_second.is_zero()
    }
}
