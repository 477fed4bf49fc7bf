//! envswitch - pick a `.env` profile, preview it, activate it and launch a
//! project script.
//!
//! Usage:
//!   envswitch            Launch the selector in the current directory
//!   envswitch --help     Show help
//!
//! Set `ENVSWITCH_LOG` (e.g. `debug`) to control the log file verbosity.

mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use envswitch_core::{Command, SwitchError};
use envswitch_tui::{Outcome, TuiConfig};

#[derive(Parser)]
#[command(
    name = "envswitch",
    version,
    about = "Switch between .env files and launch a project script",
    long_about = "envswitch lists the .env.* files in the current directory, \
                  previews them, copies the chosen one to .env and then offers \
                  the project's scripts to run.\n\n\
                  Commands come from .env-switcherrc / .env-switcher.json / \
                  .env-switcher.toml when present, otherwise from the scripts \
                  section of package.json."
)]
struct Cli {}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let _cli = Cli::parse();
    logging::init();

    let directory = std::env::current_dir().wrap_err("Failed to read the working directory")?;
    tracing::info!(directory = %directory.display(), "starting");

    let outcome = envswitch_tui::run(TuiConfig::new(&directory))?;
    tracing::info!(?outcome, "ui closed");

    Ok(finish(outcome))
}

/// Act on the UI outcome once the terminal has been restored.
fn finish(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Exit(reason) => exit_code(reason.exit_code()),
        Outcome::Failed(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
        Outcome::Done { file, destination } => {
            let target = destination
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| destination.display().to_string());
            println!("✓ Done! {} copied to {target}", file.name);
            ExitCode::SUCCESS
        }
        Outcome::Run(command) => run_command(&command),
    }
}

fn run_command(command: &Command) -> ExitCode {
    // The child gets a clean screen
    let _ = crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));

    match envswitch_ops::execute(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, SwitchError::ChildExit { .. }) {
                eprintln!("Error: {e}");
            }
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status(code))
}

/// Codes outside the portable range are reported as a generic failure.
fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exit_status_range() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(130), 130);
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(300), 1);
    }
}
