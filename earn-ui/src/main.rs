use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use earn_core::{CurrencyCode, EarningsTracker, HoursPerDay, WorkWeek};
use tracing::{debug, info};

use earn_ui::{
    App,
    commands::Command,
    config::{Overrides, Settings, SettingsFile},
    logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Real-time salary counter.
///
/// Derives per-day, per-hour and per-minute rates from a monthly income and
/// work schedule, then counts earnings up live while the session runs.
#[derive(Debug, Parser)]
#[command(name = "salary-counter", version, about)]
struct Cli {
    /// TOML settings file; command-line flags take precedence over it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Monthly income, e.g. `5000` or `5,000.00`.
    #[arg(long)]
    income: Option<String>,

    /// Days per work week (7 or 5).
    #[arg(long, value_parser = parse_work_week)]
    work_week: Option<WorkWeek>,

    /// Hours per work day (24, 9 or 8).
    #[arg(long, value_parser = parse_hours)]
    hours: Option<HoursPerDay>,

    /// Display currency (ISO-4217 code).
    #[arg(long, value_parser = parse_currency)]
    currency: Option<CurrencyCode>,

    /// Log filter, e.g. `debug` or `earn_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(long, short)]
    quiet: bool,

    /// Start the session counter immediately.
    #[arg(long)]
    autostart: bool,

    /// Print the dashboard once and exit.
    #[arg(long)]
    once: bool,
}

fn parse_work_week(s: &str) -> Result<WorkWeek, String> {
    WorkWeek::parse(s).ok_or_else(|| format!("expected 7 or 5, got '{s}'"))
}

fn parse_hours(s: &str) -> Result<HoursPerDay, String> {
    HoursPerDay::parse(s).ok_or_else(|| format!("expected 24, 9 or 8, got '{s}'"))
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    CurrencyCode::parse(s).ok_or_else(|| {
        let known: Vec<_> = CurrencyCode::ALL.iter().map(CurrencyCode::as_str).collect();
        format!("unsupported currency '{s}', expected one of {}", known.join(", "))
    })
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let file = cli
        .config
        .as_deref()
        .map(SettingsFile::load)
        .transpose()
        .context("failed to load settings")?;

    let settings = Settings::resolve(
        file,
        Overrides {
            monthly_income: cli.income,
            work_week: cli.work_week,
            hours_per_day: cli.hours,
            currency: cli.currency,
            log_level: cli.log_level,
            log_file: cli.log_file,
        },
    );

    if let Some(level) = &settings.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &settings.log_file {
        logging::enable_file_logging(path)?;
    }
    if cli.quiet {
        logging::set_stderr_enabled(false)?;
    }

    info!(app = logging::app_name(), "starting");
    debug!(?settings, "resolved settings");

    let mut app = App::new(EarningsTracker::with_system_clock(settings.schedule));

    if cli.once {
        println!("{}", app.dashboard().render());
        return Ok(());
    }

    if cli.autostart {
        let reply = app.apply(Command::Start);
        if !app.tracker().is_running() {
            if let Some(notice) = reply.output {
                eprintln!("{notice}");
            }
        }
    }

    earn_ui::run(app).await
}
