//! The `split` command - print one filtered segment per line.

use fsv::{FilteredStringView, split};

use crate::cli::SplitArgs;
use crate::common::CliResult;
use crate::common::filter::apply;
use crate::common::input::{read_input, write_lines};

/// Run the split command.
pub fn run(args: SplitArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.input.input)?;
    let view = apply(&content, &args.filter);
    let token = FilteredStringView::new(&args.token);
    let segments = split(&view, &token);
    tracing::info!(input = %display_name, segments = segments.len(), "split");
    write_lines(segments.iter().map(FilteredStringView::to_bytes))
}
