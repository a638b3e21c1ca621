mod currency;
mod progress;
mod rates;
mod schedule_config;

pub use currency::CurrencyCode;
pub use progress::Progress;
pub use rates::Rates;
pub use schedule_config::{HoursPerDay, ScheduleConfig, WorkWeek};
