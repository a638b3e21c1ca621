use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Completion percentages against the daily, monthly and yearly goals.
///
/// Values are not clamped and may exceed 100; clamping belongs to whatever
/// draws the bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub daily: Decimal,
    pub monthly: Decimal,
    pub yearly: Decimal,
}
