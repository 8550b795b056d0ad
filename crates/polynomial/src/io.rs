// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Single-line read/write boundary for the textual form.

use crate::errors::PolynomialError;
use std::io::{BufRead, Write};
use tracing::trace;

/// Reads the first line of `reader`, without its line terminator.
///
/// An empty source yields an empty string.
///
/// # Errors
///
/// Returns `PolynomialError::IoError` if the read fails.
pub fn read_first_line<R: BufRead>(mut reader: R) -> Result<String, PolynomialError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    trace!(bytes = read, "Read polynomial line");
    Ok(line)
}

/// Writes `text` to `writer` as-is and flushes it. No newline is appended.
///
/// # Errors
///
/// Returns `PolynomialError::IoError` if the write or flush fails.
pub fn write_text<W: Write>(mut writer: W, text: &str) -> Result<(), PolynomialError> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    trace!(bytes = text.len(), "Wrote polynomial line");
    Ok(())
}
