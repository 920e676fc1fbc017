//! Folio Shell
//!
//! The interpreter behind the portfolio terminal. A [`Shell`] owns the fixed
//! command registry and the random source; all mutable session data lives in
//! a [`SessionState`] value that is passed into every call, so the whole
//! interpreter can be driven without a frontend.
//!
//! Supports:
//! - a fixed set of commands dispatched through a [`CommandRegistry`]
//! - command history with up/down recall and prefix autocomplete
//! - composite navigation plans for clickable shortcuts
//! - a modal snake game entered with `snake` and left with Escape

pub mod commands;
pub mod config;
pub mod content;
pub mod input;
pub mod navigate;
pub mod output;
pub mod session;
pub mod shell;
pub mod theme;
pub mod timer;

use folio_vfs::FsError;
use thiserror::Error;

pub use commands::{Command, CommandContext, CommandRegistry};
pub use input::{Key, KeyOutcome};
pub use navigate::{NavigationPlan, PlanStep, plan_navigation};
pub use output::{EntryKind, ListEntry, Output, Record};
pub use session::{Mode, SessionState};
pub use shell::Shell;
pub use theme::{THEMES, Theme};
pub use timer::Ticker;

// ============================================================================
// Shell Error Types
// ============================================================================

/// Errors a command can report. The `Display` text is exactly what the
/// terminal shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Command needs an operand that was not given
    #[error("{command}: missing argument")]
    MissingArgument { command: &'static str },
    /// `cd` target is missing or not a directory
    #[error("cd: {0}: No such directory")]
    NoSuchDirectory(String),
    /// `cat` target has no content here
    #[error("cat: {0}: No such file")]
    NoSuchFile(String),
    /// Command not found
    #[error("bash: {0}: command not found. Type 'help' for available commands.")]
    UnknownCommand(String),
    /// Lookup failed inside the virtual filesystem
    #[error("{0}")]
    Filesystem(#[from] FsError),
}
