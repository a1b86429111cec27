//! The `substr` command - print a range of the filtered text.

use fsv::substr;

use crate::cli::SubstrArgs;
use crate::common::CliResult;
use crate::common::filter::apply;
use crate::common::input::{read_input, write_raw};

/// Run the substr command.
pub fn run(args: SubstrArgs) -> CliResult<()> {
    let (content, display_name) = read_input(&args.input.input)?;
    let view = apply(&content, &args.filter);
    let range = substr(&view, args.pos, args.count)?;
    tracing::info!(
        input = %display_name,
        pos = args.pos,
        count = ?args.count,
        size = range.len(),
        "substr"
    );
    write_raw(&range.to_bytes())
}
