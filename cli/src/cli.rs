//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// fsv - Filter, slice and split text without copying it
#[derive(Parser, Debug)]
#[command(name = "fsv", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the filtered text as is, without adding a newline
    Filter(FilterCommandArgs),

    /// Print a range of the filtered text as is, without adding a newline
    Substr(SubstrArgs),

    /// Split the filtered text on a token, one segment per line
    Split(SplitArgs),

    /// Print the raw and filtered lengths
    Stats(StatsArgs),
}

/// Options that decide which bytes are visible.
///
/// Every option adds one condition; a byte is visible when it satisfies all
/// of them.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only bytes that appear in CHARS (repeatable)
    #[arg(long, value_name = "CHARS")]
    pub keep: Vec<String>,

    /// Hide bytes that appear in CHARS (repeatable)
    #[arg(long, value_name = "CHARS")]
    pub drop: Vec<String>,

    /// Keep only bytes of an ASCII character class (repeatable)
    #[arg(long, value_enum, value_name = "CLASS")]
    pub class: Vec<CharClass>,
}

/// Input source shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}

/// Arguments for the `filter` command.
#[derive(Args, Debug)]
pub struct FilterCommandArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `substr` command.
#[derive(Args, Debug)]
pub struct SubstrArgs {
    /// Logical position of the first byte
    #[arg(long, default_value_t = 0)]
    pub pos: usize,

    /// Number of bytes to take (default: to the end)
    #[arg(long)]
    pub count: Option<usize>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `split` command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Delimiter to split on
    #[arg(long)]
    pub token: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `stats` command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// ASCII character classes accepted by `--class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharClass {
    /// A-Z and a-z
    Alpha,
    /// 0-9
    Digit,
    /// Letters and digits
    Alnum,
    /// Space, tab, newline, form feed and carriage return
    Space,
    /// A-Z
    Upper,
    /// a-z
    Lower,
    /// Printable punctuation
    Punct,
    /// Any printable byte except space
    Graphic,
}
