//! fsv CLI - filter, slice and split text without copying it.

use clap::Parser;
use fsv_cli::cli::{Cli, Command};
use fsv_cli::{commands, common};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Filter(args) => commands::filter::run(args),
        Command::Substr(args) => commands::substr::run(args),
        Command::Split(args) => commands::split::run(args),
        Command::Stats(args) => commands::stats::run(args),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
