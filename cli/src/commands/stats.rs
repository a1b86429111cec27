//! The `stats` command - report how much of the input is visible.

use crate::cli::StatsArgs;
use crate::common::CliResult;
use crate::common::filter::apply;
use crate::common::input::{read_input, write_lines};

/// Run the stats command.
pub fn run(args: StatsArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.input.input)?;
    let view = apply(&content, &args.filter);
    let (raw_len, len) = (view.raw_len(), view.len());
    tracing::info!(input = %display_name, raw_len, len, "stats");
    write_lines([
        format!("raw length: {raw_len}"),
        format!("filtered length: {len}"),
        format!("hidden: {}", raw_len - len),
    ])
}
