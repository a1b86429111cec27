//! Error handling utilities for the CLI.

use nu_ansi_term::Color;
use thiserror::Error;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    View(#[from] fsv::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    tracing::debug!(?error, "command failed");
    if no_color {
        eprintln!("error: {error}");
    } else {
        eprintln!("{}: {error}", Color::Red.bold().paint("error"));
    }
    std::process::exit(1);
}
