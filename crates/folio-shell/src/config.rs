//! Terminal configuration constants
//!
//! Tunable parameters shared by the interpreter and the frontend.

/// Cursor blink half-period (600ms)
pub const CURSOR_BLINK_MS: u64 = 600;

/// Snake simulation step (150ms)
///
/// The frontend can override this from the command line; the engine itself
/// has no notion of time.
pub const SNAKE_TICK_MS: u64 = 150;

/// Autocomplete shows at most this many candidates
pub const MAX_SUGGESTIONS: usize = 5;

/// Separator between the path and the command in a prompt
pub const PROMPT_SUFFIX: &str = "$ ";

/// Title shown in the window chrome
pub const WINDOW_TITLE: &str = "shaurya@personal:~";

/// Lines printed above the first prompt
pub const BANNER: &[&str] = &["~/shaurya", "~$ ls"];

/// Entries offered as clickable shortcuts under the banner
pub const SHORTCUTS: &[&str] = &["life", "find_my"];

/// Directory holding the biographical sections
pub const LIFE_DIR: &str = "life";

/// File that resolves from any directory
pub const FIND_MY: &str = "find_my";
