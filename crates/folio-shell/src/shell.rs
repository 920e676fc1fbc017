//! Shell Driver
//!
//! [`Shell`] ties the registry, the filesystem and the random source
//! together. It runs command lines, expands navigation plans, routes keys by
//! mode and steps the snake game.

use folio_snake::{Direction, TickOutcome};
use folio_vfs::Filesystem;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_core::RngCore;

use crate::commands::{CommandContext, CommandRegistry, create_default_registry, split_command_line};
use crate::config::PROMPT_SUFFIX;
use crate::input::{self, Key, KeyOutcome};
use crate::navigate::{NavigationPlan, plan_navigation};
use crate::output::{Output, Record};
use crate::session::SessionState;
use crate::ShellError;

/// The interpreter. Holds nothing per-session; every call takes the
/// [`SessionState`] it acts on.
pub struct Shell<R: RngCore = StdRng> {
    registry: CommandRegistry,
    fs: &'static Filesystem,
    rng: R,
}

impl Shell<StdRng> {
    /// Shell over the portfolio tree with an OS-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Shell whose jokes and food placement repeat for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Shell<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Shell<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            registry: create_default_registry(),
            fs: Filesystem::portfolio(),
            rng,
        }
    }

    // ========================================================================
    // Command Execution
    // ========================================================================

    /// Run one command line against `state`.
    ///
    /// Blank lines do nothing. Any other line resets history browsing, is
    /// appended to history unless the command opts out, and yields a record
    /// unless the command suppresses its echo.
    pub fn execute(&mut self, state: &mut SessionState, line: &str) -> Option<Record> {
        let line = line.trim();
        state.history_cursor = None;
        let (name, args) = split_command_line(line)?;

        let echo = format!("{}{}{}", state.cwd(), PROMPT_SUFFIX, line);
        let command = self.registry.find(name);
        debug!("shell: dispatch {:?} args={:?} cwd={}", name, args, state.cwd());

        let result = match command {
            Some(cmd) => {
                let mut ctx = CommandContext {
                    state: &mut *state,
                    fs: self.fs,
                    registry: &self.registry,
                    rng: &mut self.rng,
                };
                cmd.execute(&args, &mut ctx)
            }
            None => Err(ShellError::UnknownCommand(String::from(name))),
        };
        let output = result.unwrap_or_else(|err| {
            debug!("shell: {} failed: {}", name, err);
            Output::from(err)
        });

        if command.is_none_or(|cmd| cmd.recorded()) {
            state.history.push(String::from(line));
        }
        if !command.is_none_or(|cmd| cmd.echoes()) {
            return None;
        }

        let record = Record { echo, output };
        state.output_log.push(record.clone());
        Some(record)
    }

    /// Activate a shortcut (`life`, `find_my` or a life file)
    pub fn navigate(&mut self, state: &mut SessionState, name: &str) -> Vec<Record> {
        let plan = plan_navigation(name, state.cwd());
        debug!("shell: navigate {} with {} steps", name, plan.len());
        self.run_plan(state, plan)
    }

    /// Run the steps of `plan` in order.
    ///
    /// A step tied to a directory is dropped, together with the rest of the
    /// plan, if the session did not end up there.
    pub fn run_plan(&mut self, state: &mut SessionState, plan: NavigationPlan) -> Vec<Record> {
        let mut records = Vec::with_capacity(plan.len());

        for step in plan {
            if let Some(expected) = &step.expects {
                if state.cwd() != expected {
                    warn!(
                        "shell: skipping {:?}, expected {} but at {}",
                        step.line,
                        expected,
                        state.cwd()
                    );
                    break;
                }
            }
            debug!("shell: plan step {:?}", step.line);
            records.extend(self.execute(state, &step.line));
        }
        records
    }

    // ========================================================================
    // Key Handling
    // ========================================================================

    /// Route a key press according to the current mode
    pub fn handle_key(&mut self, state: &mut SessionState, key: Key) -> KeyOutcome {
        if state.is_snake_mode() {
            return self.snake_key(state, key);
        }

        let changed = match key {
            Key::Char(c) => {
                state.input.push(c);
                input::refresh_suggestions(state, self.registry.names());
                true
            }
            Key::Backspace => {
                if state.input.pop().is_none() {
                    return KeyOutcome::Ignored;
                }
                input::refresh_suggestions(state, self.registry.names());
                true
            }
            Key::Tab => input::accept_suggestion(state),
            Key::Up => input::arrow_up(state),
            Key::Down => input::arrow_down(state),
            Key::Enter => {
                if input::accept_suggestion(state) {
                    return KeyOutcome::Edited;
                }
                let line = core::mem::take(&mut state.input);
                state.suggestions.clear();
                state.selected_suggestion = 0;
                let record = self.execute(state, &line);
                if state.is_snake_mode() {
                    return KeyOutcome::ModeChanged;
                }
                return KeyOutcome::Executed(record);
            }
            Key::Left | Key::Right | Key::Escape => false,
        };

        if changed {
            KeyOutcome::Edited
        } else {
            KeyOutcome::Ignored
        }
    }

    fn snake_key(&mut self, state: &mut SessionState, key: Key) -> KeyOutcome {
        let direction = match key {
            Key::Escape => {
                state.exit_snake();
                return KeyOutcome::ModeChanged;
            }
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            Key::Left => Direction::Left,
            Key::Right => Direction::Right,
            _ => return KeyOutcome::Ignored,
        };

        match state.snake_mut() {
            Some(game) => {
                game.set_direction(direction);
                KeyOutcome::Steered
            }
            None => KeyOutcome::Ignored,
        }
    }

    // ========================================================================
    // Snake
    // ========================================================================

    /// Advance the running game by one tick. `None` outside snake mode.
    pub fn tick_snake(&mut self, state: &mut SessionState) -> Option<TickOutcome> {
        let game = state.snake_mut()?;
        Some(game.tick(&mut self.rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigate::PlanStep;
    use folio_vfs::VPath;
    use rand::rngs::mock::StepRng;

    fn shell() -> Shell<StepRng> {
        Shell::with_rng(StepRng::new(0, 0))
    }

    #[test]
    fn test_echo_uses_path_before_command() {
        let mut shell = shell();
        let mut state = SessionState::new();
        let record = shell.execute(&mut state, "  cd life ").unwrap();
        assert_eq!(record.echo, "~$ cd life");
        assert_eq!(record.output, Output::Empty);
        assert_eq!(state.cwd().to_string(), "~/life");
        assert_eq!(state.history(), ["cd life"]);
    }

    #[test]
    fn test_blank_line_ignored() {
        let mut shell = shell();
        let mut state = SessionState::new();
        assert_eq!(shell.execute(&mut state, "   "), None);
        assert!(state.history().is_empty());
        assert!(state.output_log().is_empty());
    }

    #[test]
    fn test_unknown_command_recorded() {
        let mut shell = shell();
        let mut state = SessionState::new();
        let record = shell.execute(&mut state, "rm -rf /").unwrap();
        assert_eq!(
            record.output,
            Output::Error(String::from(
                "bash: rm: command not found. Type 'help' for available commands."
            ))
        );
        assert_eq!(state.history(), ["rm -rf /"]);
        assert!(state.cwd().is_root());
    }

    #[test]
    fn test_joke_uses_injected_rng() {
        let mut shell = shell();
        let mut state = SessionState::new();
        let record = shell.execute(&mut state, "joke").unwrap();
        assert_eq!(record.output, Output::text(crate::commands::fun::JOKES[0]));
    }

    #[test]
    fn test_life_shortcut_from_inside_life() {
        let mut shell = shell();
        let mut state = SessionState::new();
        // Inside ~/life `cd life` fails but the session is already where `ls` expects
        let _ = shell.execute(&mut state, "cd life");
        let records = shell.navigate(&mut state, "life");
        assert_eq!(records.len(), 2);
        assert!(records[0].output.is_error());
        assert!(matches!(records[1].output, Output::List(_)));
    }

    #[test]
    fn test_plan_stops_when_directory_not_reached() {
        let mut shell = shell();
        let mut state = SessionState::new();
        let life = VPath::root().join("life");
        let plan: NavigationPlan = [
            PlanStep::new("cd nowhere"),
            PlanStep::expecting("cat now", life),
            PlanStep::new("pwd"),
        ]
        .into_iter()
        .collect();

        let records = shell.run_plan(&mut state, plan);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].echo, "~$ cd nowhere");
        assert!(records[0].output.is_error());
        assert!(state.cwd().is_root());
        assert_eq!(state.history(), ["cd nowhere"]);
    }

    #[test]
    fn test_plan_runs_dependent_step_after_cd() {
        let mut shell = shell();
        let mut state = SessionState::new();
        let life = VPath::root().join("life");
        let plan: NavigationPlan = [
            PlanStep::new("cd life"),
            PlanStep::expecting("cat now", life.clone()),
        ]
        .into_iter()
        .collect();

        let records = shell.run_plan(&mut state, plan);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].echo, "~/life$ cat now");
        assert!(!records[1].output.is_error());
        assert_eq!(*state.cwd(), life);
    }

    #[test]
    fn test_tick_outside_snake_mode() {
        let mut shell = shell();
        let mut state = SessionState::new();
        assert_eq!(shell.tick_snake(&mut state), None);
    }

    #[test]
    fn test_enter_runs_line() {
        let mut shell = shell();
        let mut state = SessionState::new();
        for c in "pwd".chars() {
            shell.handle_key(&mut state, Key::Char(c));
        }
        // "pwd" is an exact prefix match, so the first Enter only commits it
        assert_eq!(shell.handle_key(&mut state, Key::Enter), KeyOutcome::Edited);
        let outcome = shell.handle_key(&mut state, Key::Enter);
        let KeyOutcome::Executed(Some(record)) = outcome else {
            panic!("expected a record, got {outcome:?}");
        };
        assert_eq!(record.output, Output::text("~"));
        assert_eq!(state.input(), "");
    }
}
