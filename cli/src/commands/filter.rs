//! The `filter` command - print the filtered text.

use crate::cli::FilterCommandArgs;
use crate::common::CliResult;
use crate::common::filter::apply;
use crate::common::input::{read_input, write_raw};

/// Run the filter command.
pub fn run(args: FilterCommandArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.input.input)?;
    let view = apply(&content, &args.filter);
    tracing::info!(input = %display_name, size = view.len(), "filtered");
    write_raw(&view.to_bytes())
}
