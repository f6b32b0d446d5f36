//! Dictionary indexer
//!
//! Filters raw entries and partitions the survivors into row candidates
//! (length == width) and column prefixes (from words of length == height).

use super::{ColumnPrefixTable, SHORT_WORD_MAX_LEN, SHORT_WORDS};
use crate::config::{Dimensions, IndexOptions};
use crate::core::{Word, WordError};
use std::collections::BTreeSet;
use std::io::{self, BufRead};

/// Counters collected while indexing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub lines_read: usize,
    pub accepted: usize,
    pub invalid_characters: usize,
    pub repeated_letters: usize,
    pub short_words: usize,
}

impl IndexStats {
    /// Number of entries discarded for any reason
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.invalid_characters + self.repeated_letters + self.short_words
    }
}

/// Precomputed search input built from a dictionary
///
/// Immutable once built; the search only borrows it.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    dimensions: Dimensions,
    rows: Vec<Word>,
    prefixes: ColumnPrefixTable,
    stats: IndexStats,
}

impl DictionaryIndex {
    /// Build an index from dictionary lines
    ///
    /// Malformed entries are skipped, never reported as errors.
    ///
    /// # Examples
    /// ```
    /// use word_grid::config::{Dimensions, IndexOptions};
    /// use word_grid::dictionary::DictionaryIndex;
    ///
    /// let dims = Dimensions::new(2, 2).unwrap();
    /// let index = DictionaryIndex::build(["to", "at", "zoo"], dims, IndexOptions::default());
    ///
    /// let rows: Vec<&str> = index.rows().iter().map(|w| w.text()).collect();
    /// assert_eq!(rows, ["AT", "TO"]);
    /// ```
    pub fn build<I, S>(lines: I, dimensions: Dimensions, options: IndexOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new(dimensions, options);
        for line in lines {
            builder.add(line.as_ref());
        }
        builder.finish()
    }

    /// Build an index from a line-oriented reader
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered; nothing read before it is kept.
    /// Lines that are not valid UTF-8 are skipped like any other entry with
    /// characters outside A–Z.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        dimensions: Dimensions,
        options: IndexOptions,
    ) -> io::Result<Self> {
        let mut builder = IndexBuilder::new(dimensions, options);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = strip_line_ending(&buf);
            match std::str::from_utf8(line) {
                Ok(line) => builder.add(line),
                Err(_) => builder.reject_undecodable(),
            }
        }
        Ok(builder.finish())
    }

    /// Grid dimensions this index was built for
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Row candidates in ascending lexicographic order, without duplicates
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Word] {
        &self.rows
    }

    /// Column prefix table
    #[inline]
    #[must_use]
    pub const fn prefixes(&self) -> &ColumnPrefixTable {
        &self.prefixes
    }

    /// Counters gathered while indexing
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> IndexStats {
        self.stats
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

struct IndexBuilder {
    dimensions: Dimensions,
    options: IndexOptions,
    rows: BTreeSet<Word>,
    prefixes: ColumnPrefixTable,
    stats: IndexStats,
}

impl IndexBuilder {
    fn new(dimensions: Dimensions, options: IndexOptions) -> Self {
        Self {
            dimensions,
            options,
            rows: BTreeSet::new(),
            prefixes: ColumnPrefixTable::new(dimensions.height()),
            stats: IndexStats::default(),
        }
    }

    fn reject_undecodable(&mut self) {
        self.stats.lines_read += 1;
        self.stats.invalid_characters += 1;
    }

    fn add(&mut self, line: &str) {
        self.stats.lines_read += 1;

        let word = if self.options.strip_apostrophes && line.contains('\'') {
            Word::new(line.replace('\'', ""))
        } else {
            Word::new(line)
        };

        let word = match word {
            Ok(word) => word,
            Err(WordError::RepeatedLetter(_)) => {
                self.stats.repeated_letters += 1;
                return;
            }
            Err(WordError::Empty | WordError::InvalidCharacter(_)) => {
                self.stats.invalid_characters += 1;
                return;
            }
        };

        if self.options.restrict_short_words
            && word.len() <= SHORT_WORD_MAX_LEN
            && !SHORT_WORDS.contains(word.text())
        {
            self.stats.short_words += 1;
            return;
        }

        self.stats.accepted += 1;
        if word.len() == self.dimensions.height() {
            self.prefixes.insert(&word);
        }
        if word.len() == self.dimensions.width() {
            self.rows.insert(word);
        }
    }

    fn finish(self) -> DictionaryIndex {
        let rows: Vec<Word> = self.rows.into_iter().collect();

        log::debug!(
            "Indexed {} lines: {} accepted, {} invalid, {} repeated letters, {} short",
            self.stats.lines_read,
            self.stats.accepted,
            self.stats.invalid_characters,
            self.stats.repeated_letters,
            self.stats.short_words
        );
        log::debug!(
            "{} row candidates of length {}, {} column words of length {}",
            rows.len(),
            self.dimensions.width(),
            self.prefixes.column_words(),
            self.dimensions.height()
        );

        DictionaryIndex {
            dimensions: self.dimensions,
            rows,
            prefixes: self.prefixes,
            stats: self.stats,
        }
    }
}
