//! Built-in Shell Commands
//!
//! Session commands: pwd, clear, help, history, whoami, date, echo, snake, theme

use core::fmt::Write as _;

use chrono::Local;

use super::{Command, CommandContext};
use crate::ShellError;
use crate::output::Output;

// ============================================================================
// Pwd Command
// ============================================================================

/// Pwd command - print working directory
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }
    fn description(&self) -> &'static str {
        "show current directory"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::Text(ctx.state.cwd().to_string()))
    }
}

/// Static instance
pub static PWD_CMD: PwdCommand = PwdCommand;

// ============================================================================
// Clear Command
// ============================================================================

/// Clear command - wipes the output log and the history
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn description(&self) -> &'static str {
        "clear terminal"
    }
    fn echoes(&self) -> bool {
        false
    }
    fn recorded(&self) -> bool {
        false
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        ctx.state.clear();
        Ok(Output::Empty)
    }
}

/// Static instance
pub static CLEAR_CMD: ClearCommand = ClearCommand;

// ============================================================================
// Help Command
// ============================================================================

/// Help command - shows available commands
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn description(&self) -> &'static str {
        "show this help"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let mut text = String::from("Available commands:");
        for cmd in ctx.registry.commands() {
            let _ = write!(text, "\n  {} - {}", cmd.name(), cmd.description());
        }
        Ok(Output::Text(text))
    }
}

/// Static instance
pub static HELP_CMD: HelpCommand = HelpCommand;

// ============================================================================
// History Command
// ============================================================================

/// History command - lists earlier command lines, 1-based
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }
    fn description(&self) -> &'static str {
        "show command history"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let history = ctx.state.history();
        if history.is_empty() {
            return Ok(Output::Empty);
        }
        let lines: Vec<String> = history
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}: {}", i + 1, line))
            .collect();
        Ok(Output::Text(lines.join("\n")))
    }
}

/// Static instance
pub static HISTORY_CMD: HistoryCommand = HistoryCommand;

// ============================================================================
// Whoami Command
// ============================================================================

const WHOAMI: &str = "shaurya bisht
student, dev, researcher, human
currently exploring the intersection of tech and human flourishing";

/// Whoami command - who runs this site
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }
    fn description(&self) -> &'static str {
        "display user info"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::text(WHOAMI))
    }
}

/// Static instance
pub static WHOAMI_CMD: WhoamiCommand = WhoamiCommand;

// ============================================================================
// Date Command
// ============================================================================

/// Date command - local date and time, e.g. `3/14/2025, 9:26:53 AM`
pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }
    fn description(&self) -> &'static str {
        "show current date/time"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let now = Local::now();
        Ok(Output::Text(now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()))
    }
}

/// Static instance
pub static DATE_CMD: DateCommand = DateCommand;

// ============================================================================
// Echo Command
// ============================================================================

/// Echo command - echoes text back
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }
    fn description(&self) -> &'static str {
        "display text"
    }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::Text(args.join(" ")))
    }
}

/// Static instance
pub static ECHO_CMD: EchoCommand = EchoCommand;

// ============================================================================
// Snake Command
// ============================================================================

/// Snake command - switches the session into the snake game
pub struct SnakeCommand;

impl Command for SnakeCommand {
    fn name(&self) -> &'static str {
        "snake"
    }
    fn description(&self) -> &'static str {
        "play snake game"
    }
    fn echoes(&self) -> bool {
        false
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        ctx.state.enter_snake();
        Ok(Output::Empty)
    }
}

/// Static instance
pub static SNAKE_CMD: SnakeCommand = SnakeCommand;

// ============================================================================
// Theme Command
// ============================================================================

/// Theme command - cycles the colour palette
pub struct ThemeCommand;

impl Command for ThemeCommand {
    fn name(&self) -> &'static str {
        "theme"
    }
    fn description(&self) -> &'static str {
        "change color theme"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let theme = ctx.state.next_theme();
        Ok(Output::Text(format!("Theme changed to: {}", theme.name)))
    }
}

/// Static instance
pub static THEME_CMD: ThemeCommand = ThemeCommand;
