//! Plain-text output for CLI commands
//!
//! Results and messages go to the supplied writer (stdout in the binary);
//! logs go to stderr through the subscriber.

use std::fmt::Display;
use std::io::Write;

use super::errors::CliResult;

/// Writes one line
pub fn write_line<W: Write>(out: &mut W, line: impl Display) -> CliResult<()> {
    writeln!(out, "{}", line)?;
    Ok(())
}

/// Writes each item on its own line, returning the count
pub fn write_lines<W: Write, T: Display>(
    out: &mut W,
    items: impl IntoIterator<Item = T>,
) -> CliResult<usize> {
    let mut count = 0;
    for item in items {
        writeln!(out, "{}", item)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
