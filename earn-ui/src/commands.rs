//! Interactive commands read from stdin, one per line.

use earn_core::{CurrencyCode, HoursPerDay, WorkWeek};
use thiserror::Error;

/// An action requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Toggle,
    Reset,
    /// Free-text income; invalid text becomes zero income.
    Income(String),
    WorkWeek(WorkWeek),
    Hours(HoursPerDay),
    Currency(CurrencyCode),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("work week must be 7 or 5, got '{0}'")]
    InvalidWorkWeek(String),

    #[error("work hours must be 24, 9 or 8, got '{0}'")]
    InvalidHours(String),

    #[error("unsupported currency '{0}'")]
    InvalidCurrency(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  start | stop          start or stop the session counter
  <Enter> | toggle      switch between running and stopped
  reset                 zero the session counter and stop
  income <amount>       set monthly income (e.g. income 5,000)
  week <7|5>            days per work week
  hours <24|9|8>        hours per work day
  currency <CODE>       AUD CAD CHF CNY EUR GBP HKD IDR INR JPY KRW MYR PHP SGD THB TWD USD VND
  show                  redraw the dashboard
  help                  this list
  quit                  exit";

/// Parses one input line. An empty line toggles the counter.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "" | "toggle" => Command::Toggle,
        "start" => Command::Start,
        "stop" => Command::Stop,
        "reset" => Command::Reset,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "income" => Command::Income(required(rest, "income")?.to_string()),
        "week" => {
            let value = required(rest, "week")?;
            Command::WorkWeek(
                WorkWeek::parse(value).ok_or_else(|| CommandError::InvalidWorkWeek(value.to_string()))?,
            )
        }
        "hours" => {
            let value = required(rest, "hours")?;
            Command::Hours(
                HoursPerDay::parse(value).ok_or_else(|| CommandError::InvalidHours(value.to_string()))?,
            )
        }
        "currency" => {
            let value = required(rest, "currency")?;
            Command::Currency(
                CurrencyCode::parse(value)
                    .ok_or_else(|| CommandError::InvalidCurrency(value.to_string()))?,
            )
        }
        _ => return Err(CommandError::Unknown(name.to_string())),
    };

    Ok(command)
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_line_toggles() {
        assert_eq!(parse_command(""), Ok(Command::Toggle));
        assert_eq!(parse_command("   "), Ok(Command::Toggle));
    }

    #[test]
    fn simple_commands_ignore_case() {
        assert_eq!(parse_command("START"), Ok(Command::Start));
        assert_eq!(parse_command("Stop"), Ok(Command::Stop));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn income_keeps_raw_text() {
        assert_eq!(parse_command("income 5,000.50"), Ok(Command::Income("5,000.50".to_string())));
        assert_eq!(parse_command("income lots"), Ok(Command::Income("lots".to_string())));
    }

    #[test]
    fn settings_commands_parse_values() {
        assert_eq!(parse_command("week 5"), Ok(Command::WorkWeek(WorkWeek::FiveDays)));
        assert_eq!(parse_command("hours 9"), Ok(Command::Hours(HoursPerDay::Nine)));
        assert_eq!(parse_command("currency eur"), Ok(Command::Currency(CurrencyCode::Eur)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(parse_command("week 6"), Err(CommandError::InvalidWorkWeek("6".to_string())));
        assert_eq!(parse_command("hours 10"), Err(CommandError::InvalidHours("10".to_string())));
        assert_eq!(
            parse_command("currency XYZ"),
            Err(CommandError::InvalidCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn missing_argument() {
        assert_eq!(parse_command("income"), Err(CommandError::MissingArgument("income")));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse_command("jump"), Err(CommandError::Unknown("jump".to_string())));
    }
}
