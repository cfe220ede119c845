use std::io::{BufRead, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::Print;
use dir_browser_core::breadcrumb::render_breadcrumb;
use dir_browser_core::error::Result;

/// Writes the breadcrumb prompt for `path` and flushes it.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_prompt<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    queue!(out, Print(render_breadcrumb(path)))?;
    out.flush()?;
    Ok(())
}

/// Reads one line of input, or `None` once input is exhausted.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn read_command_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buffer = Vec::new();

    if input.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
}
