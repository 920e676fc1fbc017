//! Session State
//!
//! Everything that describes one visitor's ongoing interaction. A session
//! starts at `~` with empty history and log, theme 0, in shell mode, and is
//! simply dropped when the visitor leaves.

use folio_snake::SnakeGame;
use folio_vfs::VPath;
use log::info;

use crate::config::PROMPT_SUFFIX;
use crate::output::Record;
use crate::theme::{self, THEMES, Theme};

/// Top-level exclusive UI state
#[derive(Debug, Clone, Default)]
pub enum Mode {
    /// Command line
    #[default]
    Shell,
    /// Snake minigame; the game is created on entry and dropped on exit
    Snake(Box<SnakeGame>),
}

/// Per-session state, mutated only by the interpreter and the snake engine
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current working directory
    pub(crate) cwd: VPath,
    /// Executed command lines, oldest first
    pub(crate) history: Vec<String>,
    /// Position while browsing history with up/down
    pub(crate) history_cursor: Option<usize>,
    /// Rendered results, oldest first
    pub(crate) output_log: Vec<Record>,
    pub(crate) theme_index: usize,
    /// Line being edited at the prompt
    pub(crate) input: String,
    /// Autocomplete candidates for `input`
    pub(crate) suggestions: Vec<&'static str>,
    /// Highlighted entry of `suggestions`
    pub(crate) selected_suggestion: usize,
    pub(crate) mode: Mode,
}

impl SessionState {
    /// Create a fresh session at the root
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current working directory
    pub fn cwd(&self) -> &VPath {
        &self.cwd
    }

    pub(crate) fn set_cwd(&mut self, path: VPath) {
        self.cwd = path;
    }

    /// Prompt for the current directory, e.g. `~/life$ `
    pub fn prompt(&self) -> String {
        format!("{}{}", self.cwd, PROMPT_SUFFIX)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn output_log(&self) -> &[Record] {
        &self.output_log
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn theme(&self) -> &'static Theme {
        &THEMES[self.theme_index % THEMES.len()]
    }

    /// Advance to the next theme and return it
    pub(crate) fn next_theme(&mut self) -> &'static Theme {
        self.theme_index = theme::next_index(self.theme_index);
        let theme = self.theme();
        info!("session: theme changed to {}", theme.name);
        theme
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn selected_suggestion(&self) -> usize {
        self.selected_suggestion
    }

    /// Empty both the output log and the history
    pub(crate) fn clear(&mut self) {
        self.output_log.clear();
        self.history.clear();
        self.history_cursor = None;
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_snake_mode(&self) -> bool {
        matches!(self.mode, Mode::Snake(_))
    }

    pub fn snake(&self) -> Option<&SnakeGame> {
        match &self.mode {
            Mode::Snake(game) => Some(game.as_ref()),
            Mode::Shell => None,
        }
    }

    pub fn snake_mut(&mut self) -> Option<&mut SnakeGame> {
        match &mut self.mode {
            Mode::Snake(game) => Some(game.as_mut()),
            Mode::Shell => None,
        }
    }

    /// Start a fresh game
    pub(crate) fn enter_snake(&mut self) {
        info!("session: entering snake mode");
        self.mode = Mode::Snake(Box::default());
    }

    /// Drop the game, dead or alive, and return to the prompt
    pub fn exit_snake(&mut self) {
        if let Mode::Snake(game) = &self.mode {
            info!("session: leaving snake mode, score {}", game.score());
        }
        self.mode = Mode::Shell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::new();
        assert!(state.cwd().is_root());
        assert!(state.history().is_empty());
        assert!(state.output_log().is_empty());
        assert_eq!(state.history_cursor(), None);
        assert_eq!(state.theme().name, "default");
        assert!(!state.is_snake_mode());
        assert_eq!(state.prompt(), "~$ ");
    }

    #[test]
    fn test_theme_wraps() {
        let mut state = SessionState::new();
        let names: Vec<_> = (0..5).map(|_| state.next_theme().name).collect();
        assert_eq!(names, ["matrix", "retro", "ocean", "default", "matrix"]);
        assert_eq!(state.theme_index(), 1);
    }

    #[test]
    fn test_snake_mode_lifecycle() {
        let mut state = SessionState::new();
        state.enter_snake();
        assert!(state.is_snake_mode());
        assert_eq!(state.snake().map(SnakeGame::score), Some(0));
        state.exit_snake();
        assert!(state.snake().is_none());
    }
}
