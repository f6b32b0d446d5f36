//! Column prefix table
//!
//! Bucket `i` holds every length `i + 1` prefix of every column word, so a
//! partially filled column can be checked for "can this still become a word"
//! with a single hash lookup.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Per-length sets of column word prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPrefixTable {
    buckets: Vec<FxHashSet<Vec<u8>>>,
}

impl ColumnPrefixTable {
    /// Create an empty table for columns of length `height`
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            buckets: vec![FxHashSet::default(); height],
        }
    }

    /// Add every prefix of a column word
    ///
    /// Words whose length differs from the table height are ignored.
    pub fn insert(&mut self, word: &Word) {
        let letters = word.letters();
        if letters.len() != self.buckets.len() {
            return;
        }
        for (i, bucket) in self.buckets.iter_mut().enumerate() {
            let prefix = &letters[..=i];
            if !bucket.contains(prefix) {
                bucket.insert(prefix.to_vec());
            }
        }
    }

    /// Check whether `prefix` starts some column word
    ///
    /// Empty prefixes and prefixes longer than the table height never match.
    #[inline]
    #[must_use]
    pub fn contains(&self, prefix: &[u8]) -> bool {
        prefix
            .len()
            .checked_sub(1)
            .and_then(|i| self.buckets.get(i))
            .is_some_and(|bucket| bucket.contains(prefix))
    }

    /// The set of prefixes for a column filled down to row `depth` (0-based)
    #[inline]
    #[must_use]
    pub fn bucket(&self, depth: usize) -> Option<&FxHashSet<Vec<u8>>> {
        self.buckets.get(depth)
    }

    /// Number of distinct column words
    #[must_use]
    pub fn column_words(&self) -> usize {
        self.buckets.last().map_or(0, FxHashSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(height: usize, words: &[&str]) -> ColumnPrefixTable {
        let mut table = ColumnPrefixTable::new(height);
        for w in words {
            table.insert(&Word::new(w).unwrap());
        }
        table
    }

    #[test]
    fn prefixes_of_every_length() {
        let t = table(3, &["CAT", "COD"]);
        assert!(t.contains(b"C"));
        assert!(t.contains(b"CA"));
        assert!(t.contains(b"CO"));
        assert!(t.contains(b"CAT"));
        assert!(t.contains(b"COD"));
        assert!(!t.contains(b"CT"));
        assert!(!t.contains(b"A"));
    }

    #[test]
    fn bucket_sizes_collapse_duplicates() {
        let t = table(3, &["CAT", "COD", "CAT"]);
        assert_eq!(t.bucket(0).unwrap().len(), 1);
        assert_eq!(t.bucket(1).unwrap().len(), 2);
        assert_eq!(t.column_words(), 2);
        assert!(t.bucket(3).is_none());
    }

    #[test]
    fn wrong_length_words_ignored() {
        let t = table(3, &["CATS", "DO"]);
        assert_eq!(t.column_words(), 0);
        assert!(!t.contains(b"C"));
        assert!(!t.contains(b"D"));
    }

    #[test]
    fn out_of_range_prefixes() {
        let t = table(2, &["AT"]);
        assert!(!t.contains(b""));
        assert!(!t.contains(b"ATX"));
    }
}
