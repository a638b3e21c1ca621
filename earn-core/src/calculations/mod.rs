//! Earnings calculations.
//!
//! Rate derivation and progress tracking are pure functions of a
//! [`ScheduleConfig`](crate::ScheduleConfig) and the current local time.

pub mod common;
pub mod progress;
pub mod rates;

pub use progress::{base_ytd, calculate_progress, effective_seconds, seconds_into_workday};
pub use rates::calculate_rates;
