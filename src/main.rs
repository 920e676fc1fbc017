//! folio - the portfolio terminal
//!
//! Runs the shell interpreter inside a raw-mode terminal. Logging goes to a
//! file because the screen belongs to the UI.

mod app;
mod render;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use folio_shell::config::SNAKE_TICK_MS;
use log::info;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "A portfolio you browse like a shell")]
pub struct Args {
    /// Seed the random source (jokes, snake food) for a repeatable session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start without the welcome lines
    #[arg(long)]
    pub no_banner: bool,

    /// Ring the terminal bell on every keystroke
    #[arg(long)]
    pub typing_sound: bool,

    /// Snake step in milliseconds
    #[arg(long, default_value_t = SNAKE_TICK_MS)]
    pub snake_tick_ms: u64,

    /// Write logs here; without it logging is off
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    info!("folio starting: {:?}", args);

    let mut app = app::App::new(&args)?;
    let result = app.run();
    app.shutdown()?;
    result
}
