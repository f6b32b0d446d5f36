//! Per-branch search state
//!
//! A `GridState` is never mutated after construction. Descending into a row
//! choice builds a new state, so sibling branches cannot observe each other.

use crate::core::{ALPHABET_LEN, Grid, Word};
use crate::dictionary::ColumnPrefixTable;

/// Rows chosen so far plus the row candidates still usable below them
#[derive(Debug, Clone)]
pub struct GridState<'a> {
    rows: Vec<&'a Word>,
    remaining: Vec<&'a Word>,
}

impl<'a> GridState<'a> {
    /// State with no rows chosen and every candidate available
    #[must_use]
    pub fn root(candidates: &'a [Word]) -> Self {
        Self {
            rows: Vec::new(),
            remaining: candidates.iter().collect(),
        }
    }

    /// Rows chosen so far, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[&'a Word] {
        &self.rows
    }

    /// Candidates sharing no letter with any chosen row, in sorted order
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[&'a Word] {
        &self.remaining
    }

    /// Index of the row being filled
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Check that placing `word` in the next row keeps every column a valid prefix
    #[must_use]
    pub fn accepts(&self, word: &Word, prefixes: &ColumnPrefixTable) -> bool {
        let depth = self.depth();
        let Some(bucket) = prefixes.bucket(depth) else {
            return false;
        };

        let mut column = [0u8; ALPHABET_LEN];
        (0..word.len()).all(|i| {
            for (cell, row) in column.iter_mut().zip(&self.rows) {
                *cell = row.letter_at(i);
            }
            column[depth] = word.letter_at(i);
            bucket.contains(&column[..=depth])
        })
    }

    /// New state with `word` appended and conflicting candidates removed
    #[must_use]
    pub fn extend(&self, word: &'a Word) -> Self {
        let mut rows = Vec::with_capacity(self.rows.len() + 1);
        rows.extend_from_slice(&self.rows);
        rows.push(word);

        let remaining = self
            .remaining
            .iter()
            .copied()
            .filter(|candidate| !candidate.shares_letter(word))
            .collect();

        Self { rows, remaining }
    }

    /// Completed grid with `word` as the final row
    #[must_use]
    pub fn complete(&self, word: &Word) -> Grid {
        let mut rows: Vec<Word> = Vec::with_capacity(self.rows.len() + 1);
        rows.extend(self.rows.iter().map(|&row| row.clone()));
        rows.push(word.clone());
        Grid::new(rows)
    }
}
