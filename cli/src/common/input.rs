//! File input and output utilities.

use std::io::{Read, Write};

use super::error::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(Vec<u8>, String)> {
    if is_stdin(path) {
        let mut content = Vec::new();
        std::io::stdin()
            .read_to_end(&mut content)
            .map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Write `bytes` to stdout unchanged.
pub fn write_raw(bytes: &[u8]) -> CliResult<()> {
    let to_cli_error = |source| CliError::Io {
        path: "<stdout>".to_string(),
        source,
    };
    let mut out = std::io::stdout().lock();
    out.write_all(bytes).map_err(to_cli_error)?;
    out.flush().map_err(to_cli_error)
}

/// Write each line followed by `\n` to stdout.
pub fn write_lines<I, L>(lines: I) -> CliResult<()>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let to_cli_error = |source| CliError::Io {
        path: "<stdout>".to_string(),
        source,
    };
    let mut out = std::io::stdout().lock();
    for line in lines {
        out.write_all(line.as_ref()).map_err(to_cli_error)?;
        out.write_all(b"\n").map_err(to_cli_error)?;
    }
    out.flush().map_err(to_cli_error)
}
