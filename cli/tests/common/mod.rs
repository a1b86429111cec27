//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;

/// Create a new command for the fsv binary.
pub fn fsv() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fsv"))
}

/// Create a temporary file with the given content.
pub fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(content).unwrap();
    file
}
