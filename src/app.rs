//! Terminal frontend
//!
//! Owns the tty: raw mode, the alternate screen, key decoding and a frame
//! loop that drives the cursor blink and the snake clock.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use folio_shell::config::{CURSOR_BLINK_MS, SHORTCUTS};
use folio_shell::{Key, KeyOutcome, SessionState, Shell, Ticker};
use folio_snake::TickOutcome;
use log::{debug, info};

use crate::Args;
use crate::render::{self, Line, Tone};

/// Longest wait for input between frames
const FRAME_MS: u64 = 50;

// ============================================================================
// Terminal
// ============================================================================

struct Terminal {
    out: io::Stdout,
    cols: u16,
    rows: u16,
    active: bool,
}

impl Terminal {
    fn begin() -> Result<Self> {
        terminal::enable_raw_mode().context("could not enable raw mode")?;
        // From here on dropping the guard restores the tty
        let mut term = Self {
            out: io::stdout(),
            cols: 0,
            rows: 0,
            active: true,
        };
        execute!(
            term.out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )
        .context("could not enter the alternate screen")?;
        let (cols, rows) = terminal::size()?;
        term.resize(cols, rows);
        Ok(term)
    }

    fn end(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn bell(&mut self) -> Result<()> {
        queue!(self.out, Print('\x07'))?;
        Ok(())
    }

    /// Draw the title bar and then `body` from the second row down
    fn present(&mut self, shell_state: &SessionState, body: &[Line]) -> Result<()> {
        let theme = shell_state.theme();
        let width = usize::from(self.cols);
        let body = render::tail(body, usize::from(self.rows.saturating_sub(1)));

        queue!(
            self.out,
            BeginSynchronizedUpdate,
            SetBackgroundColor(render::rgb(theme.bg)),
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(render::tone_color(theme, Tone::Cursor)),
            Print(clip(&render::title(), width)),
        )?;
        for (row, line) in (1u16..).zip(body) {
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                SetForegroundColor(render::tone_color(theme, line.tone)),
                Print(clip(&line.text, width)),
            )?;
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.end();
    }
}

/// Whether a snake tick left something new to draw
fn board_changed(outcome: Option<TickOutcome>) -> bool {
    matches!(outcome, Some(o) if o != TickOutcome::Idle)
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

// ============================================================================
// Input Mapping
// ============================================================================

/// What a key press means to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Shortcut(&'static str),
    Key(Key),
}

fn map_key(event: KeyEvent) -> Option<Action> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    let mods = event.modifiers;
    if mods.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if mods.contains(KeyModifiers::ALT) {
        return match event.code {
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| d.checked_sub(1))
                .and_then(|i| SHORTCUTS.get(i))
                .copied()
                .map(Action::Shortcut),
            _ => None,
        };
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(Action::Key(key))
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    term: Terminal,
    shell: Shell,
    state: SessionState,
    show_banner: bool,
    typing_sound: bool,
    blink: Ticker,
    cursor_on: bool,
    snake_clock: Ticker,
    should_quit: bool,
}

impl App {
    pub fn new(args: &Args) -> Result<Self> {
        let shell = match args.seed {
            Some(seed) => Shell::seeded(seed),
            None => Shell::new(),
        };
        Ok(Self {
            term: Terminal::begin()?,
            shell,
            state: SessionState::new(),
            show_banner: !args.no_banner,
            typing_sound: args.typing_sound,
            blink: Ticker::from_millis(CURSOR_BLINK_MS),
            cursor_on: true,
            snake_clock: Ticker::from_millis(args.snake_tick_ms),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut last_frame = Instant::now();
        self.draw()?;

        while !self.should_quit {
            let timeout = self.next_deadline();
            let mut dirty = false;
            if event::poll(timeout)? {
                dirty |= self.handle_event(event::read()?)?;
            }

            let now = Instant::now();
            let dt = now.saturating_duration_since(last_frame);
            last_frame = now;
            dirty |= self.advance_clocks(dt);

            if dirty {
                self.draw()?;
            }
        }
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        info!("folio exiting");
        self.term.end()
    }

    fn next_deadline(&self) -> Duration {
        let mut timeout = Duration::from_millis(FRAME_MS).min(self.blink.remaining());
        if self.state.is_snake_mode() {
            timeout = timeout.min(self.snake_clock.remaining());
        }
        timeout
    }

    fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Resize(cols, rows) => {
                self.term.resize(cols, rows);
                Ok(true)
            }
            Event::Key(key) => match map_key(key) {
                Some(action) => self.apply(action),
                None => Ok(false),
            },
            _ => Ok(false),
        }
    }

    fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Ok(false)
            }
            Action::Shortcut(name) => {
                if self.state.is_snake_mode() {
                    return Ok(false);
                }
                let records = self.shell.navigate(&mut self.state, name);
                debug!("app: shortcut {} produced {} records", name, records.len());
                Ok(true)
            }
            Action::Key(key) => {
                if self.typing_sound && matches!(key, Key::Char(_)) && !self.state.is_snake_mode() {
                    self.term.bell()?;
                }
                let outcome = self.shell.handle_key(&mut self.state, key);
                if outcome == KeyOutcome::ModeChanged {
                    self.snake_clock.reset();
                }
                // Keep the cursor solid while typing
                self.cursor_on = true;
                self.blink.reset();
                Ok(outcome != KeyOutcome::Ignored)
            }
        }
    }

    fn advance_clocks(&mut self, dt: Duration) -> bool {
        let mut dirty = false;
        if self.blink.advance(dt) % 2 == 1 {
            self.cursor_on = !self.cursor_on;
            // The board has no cursor
            dirty = !self.state.is_snake_mode();
        }
        if self.state.is_snake_mode() {
            for _ in 0..self.snake_clock.advance(dt) {
                dirty |= board_changed(self.shell.tick_snake(&mut self.state));
            }
        }
        dirty
    }

    fn draw(&mut self) -> Result<()> {
        let lines = match self.state.snake() {
            Some(game) => render::snake_lines(game),
            None => render::shell_lines(&self.state, self.show_banner, self.cursor_on),
        };
        self.term.present(&self.state, &lines)
    }
}
