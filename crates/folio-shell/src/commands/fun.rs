//! Toy Commands
//!
//! Decorative output: matrix, cowsay, figlet, joke, weather

use rand::Rng;

use super::{Command, CommandContext};
use crate::ShellError;
use crate::output::Output;

// ============================================================================
// Matrix Command
// ============================================================================

const MATRIX: &str = "01001000 01100101 01101100 01101100 01101111
01010111 01101111 01110010 01101100 01100100

Wake up, Neo...";

/// Matrix command - a few lines of binary
pub struct MatrixCommand;

impl Command for MatrixCommand {
    fn name(&self) -> &'static str {
        "matrix"
    }
    fn description(&self) -> &'static str {
        "matrix effect"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::text(MATRIX))
    }
}

/// Static instance
pub static MATRIX_CMD: MatrixCommand = MatrixCommand;

// ============================================================================
// Cowsay Command
// ============================================================================

const COW: &str = r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||";

/// Cowsay command - a cow with a speech bubble
pub struct CowsayCommand;

impl CowsayCommand {
    /// Bubble framing `message`; the border is two characters wider than the text
    pub fn render(message: &str) -> String {
        let border = "-".repeat(message.chars().count() + 2);
        format!(" {border}\n< {message} >\n {border}\n{COW}")
    }
}

impl Command for CowsayCommand {
    fn name(&self) -> &'static str {
        "cowsay"
    }
    fn description(&self) -> &'static str {
        "ascii cow"
    }

    fn execute(&self, args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let message = if args.is_empty() {
            String::from("Hello!")
        } else {
            args.join(" ")
        };
        Ok(Output::Text(Self::render(&message)))
    }
}

/// Static instance
pub static COWSAY_CMD: CowsayCommand = CowsayCommand;

// ============================================================================
// Figlet Command
// ============================================================================

// Only one word is available; arguments are accepted and ignored
const FIGLET_HELLO: &str = "██╗  ██╗███████╗██╗     ██╗      ██████╗ 
██║  ██║██╔════╝██║     ██║     ██╔═══██╗
███████║█████╗  ██║     ██║     ██║   ██║
██╔══██║██╔══╝  ██║     ██║     ██║   ██║
██║  ██║███████╗███████╗███████╗╚██████╔╝
╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝ ╚═════╝ ";

/// Figlet command - big block letters
pub struct FigletCommand;

impl Command for FigletCommand {
    fn name(&self) -> &'static str {
        "figlet"
    }
    fn description(&self) -> &'static str {
        "ascii art text"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::text(FIGLET_HELLO))
    }
}

/// Static instance
pub static FIGLET_CMD: FigletCommand = FigletCommand;

// ============================================================================
// Joke Command
// ============================================================================

pub const JOKES: [&str; 4] = [
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Why do Java developers wear glasses? Because they can't C#!",
    "There are only 10 types of people: those who understand binary and those who don't.",
];

/// Joke command - one of a few jokes, picked uniformly
pub struct JokeCommand;

impl Command for JokeCommand {
    fn name(&self) -> &'static str {
        "joke"
    }
    fn description(&self) -> &'static str {
        "random joke"
    }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        let index = ctx.rng.gen_range(0..JOKES.len());
        Ok(Output::text(JOKES[index]))
    }
}

/// Static instance
pub static JOKE_CMD: JokeCommand = JokeCommand;

// ============================================================================
// Weather Command
// ============================================================================

const WEATHER: &str = "Current Weather:
🌤️ Partly cloudy, 72°F
Perfect coding weather!";

/// Weather command - always good weather
pub struct WeatherCommand;

impl Command for WeatherCommand {
    fn name(&self) -> &'static str {
        "weather"
    }
    fn description(&self) -> &'static str {
        "show weather"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext<'_>) -> Result<Output, ShellError> {
        Ok(Output::text(WEATHER))
    }
}

/// Static instance
pub static WEATHER_CMD: WeatherCommand = WeatherCommand;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cowsay_bubble_width() {
        let text = CowsayCommand::render("moo");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], " -----");
        assert_eq!(lines[1], "< moo >");
        assert_eq!(lines[2], " -----");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_figlet_rows_share_width() {
        let widths: Vec<_> = FIGLET_HELLO.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths, [41; 6]);
    }
}
