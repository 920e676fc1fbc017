//! Screen layout
//!
//! Turns the session into coloured text lines. Drawing them is the job of
//! [`crate::app`]; keeping layout separate lets it be tested without a tty.

use crossterm::style::Color;
use folio_shell::config::{BANNER, SHORTCUTS, WINDOW_TITLE};
use folio_shell::theme::Rgb;
use folio_shell::{Output, Record, SessionState, Theme};
use folio_snake::SnakeGame;

/// Which theme colour a line is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Command,
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

pub fn tone_color(theme: &Theme, tone: Tone) -> Color {
    match tone {
        Tone::Text => rgb(theme.text),
        Tone::Command => rgb(theme.command),
        Tone::Cursor => rgb(theme.cursor),
    }
}

pub fn title() -> String {
    format!("● ● ●  {WINDOW_TITLE}")
}

fn push_record(lines: &mut Vec<Line>, record: &Record) {
    lines.push(Line::new(record.echo.as_str(), Tone::Command));
    let tone = match record.output {
        Output::List(_) => Tone::Cursor,
        _ => Tone::Text,
    };
    lines.extend(record.output.lines().into_iter().map(|l| Line::new(l, tone)));
}

/// Everything below the title bar in shell mode, oldest first
pub fn shell_lines(state: &SessionState, show_banner: bool, cursor_on: bool) -> Vec<Line> {
    let mut lines = Vec::new();

    if show_banner {
        lines.extend(BANNER.iter().map(|l| Line::new(*l, Tone::Command)));
        let shortcuts: Vec<String> = SHORTCUTS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let suffix = if *name == "life" { "/" } else { "" };
                format!("{name}{suffix} [Alt+{}]", i + 1)
            })
            .collect();
        lines.push(Line::new(shortcuts.join("  "), Tone::Cursor));
        lines.push(Line::new("", Tone::Text));
    }

    for record in state.output_log() {
        push_record(&mut lines, record);
    }

    let cursor = if cursor_on { "█" } else { " " };
    lines.push(Line::new(
        format!("{}{}{}", state.prompt(), state.input(), cursor),
        Tone::Command,
    ));

    if !state.suggestions().is_empty() {
        let row: Vec<String> = state
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == state.selected_suggestion() {
                    format!("[{name}]")
                } else {
                    format!(" {name} ")
                }
            })
            .collect();
        lines.push(Line::new(row.join(" "), Tone::Cursor));
    }

    lines
}

/// Score line and board
pub fn snake_lines(game: &SnakeGame) -> Vec<Line> {
    let mut lines = vec![Line::new(game.status_line(), Tone::Command)];
    lines.extend(game.render_rows().into_iter().map(|row| {
        // Double each cell so the board looks square
        let wide: String = row.chars().flat_map(|c| [c, c]).collect();
        Line::new(wide, Tone::Text)
    }));
    if !game.is_alive() {
        lines.push(Line::new("Press ESC to return", Tone::Cursor));
    }
    lines
}

/// The newest `rows` lines
pub fn tail(lines: &[Line], rows: usize) -> &[Line] {
    &lines[lines.len().saturating_sub(rows)..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_shell::{Key, Shell};
    use rand::rngs::mock::StepRng;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_fresh_session_layout() {
        let state = SessionState::new();
        let lines = shell_lines(&state, true, true);
        assert_eq!(
            texts(&lines),
            ["~/shaurya", "~$ ls", "life/ [Alt+1]  find_my [Alt+2]", "", "~$ █"]
        );
        let lines = shell_lines(&state, false, false);
        assert_eq!(texts(&lines), ["~$  "]);
    }

    #[test]
    fn test_records_and_suggestions() {
        let mut shell = Shell::with_rng(StepRng::new(0, 0));
        let mut state = SessionState::new();
        shell.execute(&mut state, "ls");
        for c in "c".chars() {
            shell.handle_key(&mut state, Key::Char(c));
        }
        let lines = shell_lines(&state, false, true);
        assert_eq!(
            texts(&lines),
            ["~$ ls", "life/  find_my", "~$ c█", "[cd]  cat   clear   cowsay "]
        );
        assert_eq!(lines[1].tone, Tone::Cursor);
    }

    #[test]
    fn test_snake_board_size() {
        let lines = snake_lines(&SnakeGame::new());
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0].text, "Score: 0 | Press ESC to exit");
        assert!(lines[1..].iter().all(|l| l.text.chars().count() == 40));
    }

    #[test]
    fn test_tail() {
        let lines: Vec<Line> = (0..5).map(|i| Line::new(i.to_string(), Tone::Text)).collect();
        assert_eq!(texts(tail(&lines, 2)), ["3", "4"]);
        assert_eq!(tail(&lines, 10).len(), 5);
    }
}
