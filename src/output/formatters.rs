//! Grid block formatting

use crate::core::Grid;
use std::io::{self, Write};

/// Write one grid as a block: each row on its own line, then a blank line
///
/// The writer is flushed after the block so grids appear as they are found.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_grid<W: Write + ?Sized>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for row in grid.rows() {
        writeln!(out, "{row}")?;
    }
    writeln!(out)?;
    out.flush()
}

/// Format a count with thousands separators
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
