//! Completed word grid
//!
//! A Grid is the output of the search: `height` row words of equal length whose
//! columns, read top to bottom, are also dictionary words.

use super::Word;
use std::fmt;

/// A completed grid of row words
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grid {
    rows: Vec<Word>,
}

impl Grid {
    /// Create a grid from its rows, top to bottom
    ///
    /// The caller guarantees that every row has the same length.
    #[must_use]
    pub fn new(rows: Vec<Word>) -> Self {
        debug_assert!(
            rows.windows(2).all(|pair| pair[0].len() == pair[1].len()),
            "Grid rows must share one width"
        );
        Self { rows }
    }

    /// Row words, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    /// Number of columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Word::len)
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The string formed by reading column `index` top to bottom
    ///
    /// # Panics
    /// Panics if `index >= self.width()`
    #[must_use]
    pub fn column(&self, index: usize) -> String {
        self.rows
            .iter()
            .map(|row| char::from(row.letter_at(index)))
            .collect()
    }

    /// All columns, left to right
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        (0..self.width()).map(|i| self.column(i)).collect()
    }

    /// Union of the letter masks of all rows
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.rows.iter().fold(0, |mask, row| mask | row.mask())
    }

    /// Check that no letter appears twice anywhere in the grid
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        self.letter_mask().count_ones() as usize == self.width() * self.height()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
