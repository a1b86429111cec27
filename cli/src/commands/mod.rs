//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod filter;
pub mod split;
pub mod stats;
pub mod substr;
