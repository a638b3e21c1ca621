pub mod app;
pub mod commands;
pub mod config;
pub mod format;
pub mod logging;
pub mod ticker;
pub mod utils;
pub mod views;

pub use app::{App, Reply, run};
