//! Status bar listing the available commands.

/// Command hint for the status bar.
pub struct CommandHint {
    pub command: &'static str,
    pub action: &'static str,
}

impl CommandHint {
    pub const fn new(
        command: &'static str,
        action: &'static str,
    ) -> Self {
        Self { command, action }
    }
}

/// Build a status bar line from a list of command hints.
pub fn build_status_bar(hints: &[CommandHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.command, h.action))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Hints shown under the dashboard.
pub mod hints {
    use super::CommandHint;

    pub const TOGGLE: CommandHint = CommandHint::new("Enter", "Start/Stop");
    pub const RESET: CommandHint = CommandHint::new("reset", "Reset");
    pub const HELP: CommandHint = CommandHint::new("help", "Commands");
    pub const QUIT: CommandHint = CommandHint::new("quit", "Quit");

    pub const DASHBOARD: [CommandHint; 4] = [TOGGLE, RESET, HELP, QUIT];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_joins_hints() {
        let bar = build_status_bar(&hints::DASHBOARD);

        assert_eq!(bar, "Enter: Start/Stop | reset: Reset | help: Commands | quit: Quit");
    }
}
