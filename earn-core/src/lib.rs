pub mod calculations;
pub mod clock;
pub mod models;
pub mod session;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::*;
pub use session::{SessionError, SessionState};
pub use tracker::EarningsTracker;
