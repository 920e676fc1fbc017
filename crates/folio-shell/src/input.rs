//! Line Editing
//!
//! Keys, prefix autocomplete and history recall for the prompt. These
//! helpers only touch the editing fields of a [`SessionState`]; running a
//! command is left to [`Shell::handle_key`](crate::Shell::handle_key).

use crate::config::MAX_SUGGESTIONS;
use crate::output::Record;
use crate::session::SessionState;

/// A key press, already decoded by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// The input line, the suggestion list or the highlight changed
    Edited,
    /// A line was run; holds its record if the command echoes
    Executed(Option<Record>),
    /// The snake changed heading
    Steered,
    /// Shell and snake mode switched
    ModeChanged,
}

// ============================================================================
// Autocomplete
// ============================================================================

/// Command names starting with `input`, ignoring case, in registry order.
///
/// Blank input has no suggestions.
pub fn suggest<'a, I>(input: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if input.trim().is_empty() {
        return Vec::new();
    }
    let prefix = input.to_lowercase();
    names
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Recompute suggestions after the line changed and reset the highlight
pub(crate) fn refresh_suggestions<I>(state: &mut SessionState, names: I)
where
    I: IntoIterator<Item = &'static str>,
{
    state.suggestions = suggest(&state.input, names);
    state.selected_suggestion = 0;
}

/// Copy the highlighted suggestion into the line and close the list
pub(crate) fn accept_suggestion(state: &mut SessionState) -> bool {
    let Some(&choice) = state.suggestions.get(state.selected_suggestion) else {
        return false;
    };
    state.input = String::from(choice);
    state.suggestions.clear();
    state.selected_suggestion = 0;
    true
}

// ============================================================================
// Arrow Keys
// ============================================================================

/// Up arrow: move the highlight, or step back through history
pub(crate) fn arrow_up(state: &mut SessionState) -> bool {
    if !state.suggestions.is_empty() {
        if state.selected_suggestion == 0 {
            return false;
        }
        state.selected_suggestion -= 1;
        return true;
    }
    if state.history.is_empty() {
        return false;
    }

    let index = match state.history_cursor {
        None => state.history.len() - 1,
        Some(i) => i.saturating_sub(1),
    };
    recall(state, Some(index));
    true
}

/// Down arrow: move the highlight, or step forward through history.
/// Past the newest entry the cursor is released and the line emptied.
pub(crate) fn arrow_down(state: &mut SessionState) -> bool {
    if !state.suggestions.is_empty() {
        if state.selected_suggestion + 1 >= state.suggestions.len() {
            return false;
        }
        state.selected_suggestion += 1;
        return true;
    }
    let Some(i) = state.history_cursor else {
        return false;
    };

    if i + 1 < state.history.len() {
        recall(state, Some(i + 1));
    } else {
        recall(state, None);
    }
    true
}

// Suggestions are cleared, not recomputed, so repeated arrows keep walking
fn recall(state: &mut SessionState, index: Option<usize>) {
    state.history_cursor = index;
    state.input = match index {
        Some(i) => state.history.get(i).cloned().unwrap_or_default(),
        None => String::new(),
    };
    state.suggestions.clear();
    state.selected_suggestion = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 6] = ["ls", "cd", "cat", "clear", "cowsay", "theme"];

    fn with_history(lines: &[&str]) -> SessionState {
        let mut state = SessionState::new();
        state.history = lines.iter().map(|l| String::from(*l)).collect();
        state
    }

    #[test]
    fn test_suggest_prefix() {
        assert_eq!(suggest("c", NAMES), ["cd", "cat", "clear", "cowsay"]);
        assert_eq!(suggest("TH", NAMES), ["theme"]);
        assert!(suggest("x", NAMES).is_empty());
        assert!(suggest("", NAMES).is_empty());
        assert!(suggest("  ", NAMES).is_empty());
    }

    #[test]
    fn test_suggest_limit() {
        let names = ["a1", "a2", "a3", "a4", "a5", "a6", "a7"];
        assert_eq!(suggest("a", names), ["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn test_highlight_clamps() {
        let mut state = SessionState::new();
        state.input = String::from("c");
        refresh_suggestions(&mut state, NAMES);
        assert!(!arrow_up(&mut state));
        for _ in 0..10 {
            arrow_down(&mut state);
        }
        assert_eq!(state.selected_suggestion, 3);
        assert!(accept_suggestion(&mut state));
        assert_eq!(state.input, "cowsay");
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_history_walk() {
        let mut state = with_history(&["ls", "pwd", "cd life"]);
        let mut seen = Vec::new();
        for _ in 0..4 {
            arrow_up(&mut state);
            seen.push(state.input.clone());
        }
        assert_eq!(seen, ["cd life", "pwd", "ls", "ls"]);

        arrow_down(&mut state);
        assert_eq!(state.input, "pwd");
        arrow_down(&mut state);
        arrow_down(&mut state);
        assert_eq!(state.input, "");
        assert_eq!(state.history_cursor, None);
        assert!(!arrow_down(&mut state));
    }

    #[test]
    fn test_up_with_empty_history() {
        let mut state = SessionState::new();
        assert!(!arrow_up(&mut state));
        assert_eq!(state.history_cursor, None);
    }
}
