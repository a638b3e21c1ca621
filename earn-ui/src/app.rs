//! Top-level controller: routes commands to the tracker, keeps the ticker in
//! step with the session state and drives the terminal loop.

use std::io::{self, Write};

use anyhow::{Context, Result};
use earn_core::{Clock, EarningsTracker, SessionError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::commands::{Command, HELP_TEXT, parse_command};
use crate::format::{SESSION_FRACTION_DIGITS, format_money_with_digits};
use crate::ticker::Ticker;
use crate::utils::parse_income;
use crate::views::Dashboard;

/// What the terminal should do after a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Text to print, if any.
    pub output: Option<String>,
    pub quit: bool,
}

impl Reply {
    fn print(text: impl Into<String>) -> Self {
        Self {
            output: Some(text.into()),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            output: None,
            quit: true,
        }
    }
}

pub struct App<C: Clock> {
    tracker: EarningsTracker<C>,
    ticker: Ticker,
}

impl<C: Clock> App<C> {
    pub fn new(tracker: EarningsTracker<C>) -> Self {
        Self {
            tracker,
            ticker: Ticker::default(),
        }
    }

    pub fn tracker(&self) -> &EarningsTracker<C> {
        &self.tracker
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::capture(&self.tracker)
    }

    /// Parses and applies one input line.
    pub fn handle_line(
        &mut self,
        line: &str,
    ) -> Reply {
        match parse_command(line) {
            Ok(command) => self.apply(command),
            Err(e) => Reply::print(e.to_string()),
        }
    }

    /// Applies a command. Must be called from within a tokio runtime since
    /// starting the counter arms the ticker.
    pub fn apply(
        &mut self,
        command: Command,
    ) -> Reply {
        debug!(?command, "applying command");

        let reply = match command {
            Command::Start => self.start(),
            Command::Stop => {
                self.tracker.stop();
                self.render()
            }
            Command::Toggle => {
                if self.tracker.is_running() {
                    self.tracker.stop();
                    self.render()
                } else {
                    self.start()
                }
            }
            Command::Reset => {
                self.tracker.reset();
                self.render()
            }
            Command::Income(text) => {
                let income = parse_income(&text);
                self.settings_change(|tracker| tracker.set_monthly_income(income))
            }
            Command::WorkWeek(week) => self.settings_change(|tracker| tracker.set_work_week(week)),
            Command::Hours(hours) => self.settings_change(|tracker| tracker.set_hours_per_day(hours)),
            Command::Currency(code) => self.settings_change(|tracker| tracker.set_currency(code)),
            Command::Show => self.render(),
            Command::Help => Reply::print(HELP_TEXT),
            Command::Quit => Reply::quit(),
        };

        self.sync_ticker();
        reply
    }

    /// Accrues one tick and returns the status line to display.
    pub fn on_tick(&mut self) -> String {
        self.tracker.tick();
        self.dashboard().status_line()
    }

    /// Stops the counter and returns the closing summary.
    pub fn shutdown(&mut self) -> String {
        self.tracker.stop();
        self.sync_ticker();
        let total = format_money_with_digits(
            self.tracker.session_earned(),
            self.tracker.config().currency,
            SESSION_FRACTION_DIGITS,
        );
        info!(session = %self.tracker.session_earned(), "shutting down");
        format!("Session total: {total}")
    }

    fn start(&mut self) -> Reply {
        match self.tracker.start() {
            Ok(()) => self.render(),
            Err(e) => {
                warn!(%e, "start rejected");
                Reply::print(e.to_string())
            }
        }
    }

    fn settings_change(
        &mut self,
        change: impl FnOnce(&mut EarningsTracker<C>) -> Result<(), SessionError>,
    ) -> Reply {
        match change(&mut self.tracker) {
            Ok(()) => self.render(),
            Err(e) => Reply::print(e.to_string()),
        }
    }

    fn render(&self) -> Reply {
        Reply::print(self.dashboard().render())
    }

    fn sync_ticker(&mut self) {
        if self.tracker.is_running() {
            self.ticker.start();
        } else {
            self.ticker.stop();
        }
    }
}

/// Runs the interactive loop until `quit`, end of input or Ctrl-C.
pub async fn run<C: Clock>(mut app: App<C>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    writeln!(out, "{}", app.dashboard().render())?;
    // --autostart may have armed the counter before the loop.
    app.sync_ticker();

    loop {
        tokio::select! {
            _ = app.ticker.tick() => {
                let status = app.on_tick();
                write!(out, "\r{status}\x1b[K")?;
                out.flush()?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read command")? else {
                    debug!("end of input");
                    break;
                };
                let reply = app.handle_line(&line);
                if let Some(text) = reply.output {
                    writeln!(out, "\n{text}")?;
                }
                if reply.quit {
                    break;
                }
            }
            result = &mut ctrl_c => {
                result.context("failed to listen for Ctrl-C")?;
                info!("interrupted");
                break;
            }
        }
    }

    writeln!(out, "\n{}", app.shutdown())?;
    Ok(())
}
