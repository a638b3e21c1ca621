//! Start-up configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML settings
//! file, then command-line flags.
//!
//! ```toml
//! monthly_income = 5000
//! work_week = 5          # 7 or 5
//! hours_per_day = 8      # 24, 9 or 8
//! currency = "USD"
//! log_level = "info"
//! log_file = "salary-counter.log"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use earn_core::{CurrencyCode, HoursPerDay, ScheduleConfig, WorkWeek};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::utils::parse_income;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub monthly_income: Option<Decimal>,
    pub work_week: Option<WorkWeek>,
    pub hours_per_day: Option<HoursPerDay>,
    pub currency: Option<CurrencyCode>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings file");
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Free text; invalid input becomes zero income.
    pub monthly_income: Option<String>,
    pub work_week: Option<WorkWeek>,
    pub hours_per_day: Option<HoursPerDay>,
    pub currency: Option<CurrencyCode>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved start-up settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Layers `file` and then `overrides` over the defaults.
    pub fn resolve(
        file: Option<SettingsFile>,
        overrides: Overrides,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = ScheduleConfig::default();

        let monthly_income = match overrides.monthly_income {
            Some(text) => parse_income(&text),
            None => file.monthly_income.unwrap_or(defaults.monthly_income),
        };

        let schedule = ScheduleConfig {
            monthly_income,
            work_week: overrides
                .work_week
                .or(file.work_week)
                .unwrap_or(defaults.work_week),
            hours_per_day: overrides
                .hours_per_day
                .or(file.hours_per_day)
                .unwrap_or(defaults.hours_per_day),
            currency: overrides
                .currency
                .or(file.currency)
                .unwrap_or(defaults.currency),
        };

        Self {
            schedule,
            log_level: overrides.log_level.or(file.log_level),
            log_file: overrides.log_file.or(file.log_file),
        }
    }
}
