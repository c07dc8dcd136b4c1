use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use calc_ui::{Session, Settings, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Keypad calculator for the terminal.
///
/// Type keys as you would on a keyboard (`12+3 Enter`), one script per
/// line. `h` toggles the history panel, `:recall N` loads a past result,
/// `:quit` or end of input exits.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
struct Cli {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive; overrides the settings file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file; overrides the settings file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run this key script, print the final screen and exit.
    #[arg(long)]
    keys: Option<String>,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            settings.log_file = Some(path.clone());
        }
        Ok(settings)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    logging::init_logging(&settings.log_level);
    if let Some(path) = &settings.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?settings, "starting calculator");

    let mut session = Session::new(settings);

    if let Some(script) = &cli.keys {
        session.handle_line(script);
        println!("{}", session.render());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}
