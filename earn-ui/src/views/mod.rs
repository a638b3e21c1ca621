//! Terminal views for the salary counter.

pub mod dashboard;
pub mod status_bar;

pub use dashboard::{Dashboard, progress_bar};
pub use status_bar::{CommandHint, build_status_bar};
