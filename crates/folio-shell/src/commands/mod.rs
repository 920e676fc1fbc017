//! Shell Commands Module
//!
//! Contains all command implementations organized by category, the
//! `Command` trait they implement and the registry used for dispatch.

pub mod builtin;
pub mod fs;
pub mod fun;

use folio_vfs::Filesystem;
use rand_core::RngCore;

use crate::ShellError;
use crate::output::Output;
use crate::session::SessionState;

// Re-export static command instances
pub use builtin::{
    CLEAR_CMD, DATE_CMD, ECHO_CMD, HELP_CMD, HISTORY_CMD, PWD_CMD, SNAKE_CMD, THEME_CMD,
    WHOAMI_CMD,
};
pub use fs::{CAT_CMD, CD_CMD, LS_CMD, TREE_CMD};
pub use fun::{COWSAY_CMD, FIGLET_CMD, JOKE_CMD, MATRIX_CMD, WEATHER_CMD};

// ============================================================================
// Command Trait
// ============================================================================

/// Everything a command may read or change while it runs
pub struct CommandContext<'a> {
    /// Session being driven
    pub state: &'a mut SessionState,
    /// Tree to navigate
    pub fs: &'a Filesystem,
    /// Registry the command was found in (for `help`)
    pub registry: &'a CommandRegistry,
    /// Random source
    pub rng: &'a mut dyn RngCore,
}

/// A command that can be executed by the shell
///
/// Commands are stateless and implemented as unit structs. Failures are
/// returned as `ShellError`; the interpreter turns them into error output.
pub trait Command: Sync {
    /// The name typed at the prompt
    fn name(&self) -> &'static str;

    /// One-line description for help text
    fn description(&self) -> &'static str;

    /// Whether the run is echoed into the output log
    fn echoes(&self) -> bool {
        true
    }

    /// Whether the command line is kept in history
    fn recorded(&self) -> bool {
        true
    }

    /// Execute the command
    ///
    /// - `args`: whitespace-separated words after the command name
    /// - `ctx`: session, filesystem and random source
    fn execute(&self, args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError>;
}

// ============================================================================
// Command Line Parsing
// ============================================================================

/// Split a line into the command name and its arguments.
///
/// Returns `None` for blank input.
pub fn split_command_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let name = words.next()?;
    Some((name, words.collect()))
}

// ============================================================================
// Command Registry
// ============================================================================

/// Registry of available commands, in declaration order
pub struct CommandRegistry {
    commands: Vec<&'static dyn Command>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. A second command with the same name is ignored.
    pub fn register(&mut self, command: &'static dyn Command) {
        if self.find(command.name()).is_none() {
            self.commands.push(command);
        }
    }

    /// Find a command by exact (case-sensitive) name
    pub fn find(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// Get all registered commands
    pub fn commands(&self) -> &[&'static dyn Command] {
        &self.commands
    }

    /// Command names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|cmd| cmd.name())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        create_default_registry()
    }
}

/// Create and populate the default command registry
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Navigation
    registry.register(&LS_CMD);
    registry.register(&CD_CMD);
    registry.register(&CAT_CMD);
    registry.register(&PWD_CMD);

    // Session
    registry.register(&CLEAR_CMD);
    registry.register(&HELP_CMD);
    registry.register(&HISTORY_CMD);
    registry.register(&TREE_CMD);
    registry.register(&WHOAMI_CMD);
    registry.register(&DATE_CMD);
    registry.register(&ECHO_CMD);
    registry.register(&SNAKE_CMD);
    registry.register(&THEME_CMD);

    // Toys
    registry.register(&MATRIX_CMD);
    registry.register(&COWSAY_CMD);
    registry.register(&FIGLET_CMD);
    registry.register(&JOKE_CMD);
    registry.register(&WEATHER_CMD);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_line() {
        assert_eq!(split_command_line("ls"), Some(("ls", vec![])));
        assert_eq!(
            split_command_line("  echo   hello \t world "),
            Some(("echo", vec!["hello", "world"]))
        );
        assert_eq!(split_command_line("   "), None);
    }

    #[test]
    fn test_default_registry_order() {
        let registry = create_default_registry();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            [
                "ls", "cd", "cat", "pwd", "clear", "help", "history", "tree", "whoami", "date",
                "echo", "snake", "theme", "matrix", "cowsay", "figlet", "joke", "weather",
            ]
        );
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let registry = create_default_registry();
        assert!(registry.find("ls").is_some());
        assert!(registry.find("LS").is_none());
        assert!(registry.find("rm").is_none());
    }

    #[test]
    fn test_duplicate_registration_ignored() {
        let mut registry = CommandRegistry::new();
        registry.register(&LS_CMD);
        registry.register(&LS_CMD);
        assert_eq!(registry.commands().len(), 1);
    }
}
