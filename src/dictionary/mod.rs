//! Dictionary indexing
//!
//! Turns raw word-list lines into the two structures the search reads:
//! a sorted list of row candidates and a table of column prefixes.

mod indexer;
pub mod loader;
mod prefix;

pub use indexer::{DictionaryIndex, IndexStats};
pub use loader::load_dictionary;
pub use prefix::ColumnPrefixTable;

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Words of one or two letters accepted when short words are restricted
///
/// Unrestricted word lists are full of abbreviations and Roman numerals at
/// these lengths.
pub static SHORT_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "A", "I", "AH", "AM", "AN", "AS", "AT", "BE", "BY", "DC", "DO", "DR", "EX", "GO", "HA",
        "HE", "HI", "HO", "IF", "IN", "IS", "IT", "LA", "LO", "MA", "ME", "MR", "MS", "MY", "NO",
        "OF", "OH", "OK", "ON", "OR", "OW", "OX", "PA", "PI", "SO", "ST", "TO", "UP", "US", "WE",
    ]
    .into_iter()
    .collect()
});

/// Longest word length subject to the short-word allow-list
pub const SHORT_WORD_MAX_LEN: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_short_and_uppercase() {
        assert_eq!(SHORT_WORDS.len(), 45);
        for word in SHORT_WORDS.iter() {
            assert!(word.len() <= SHORT_WORD_MAX_LEN);
            assert!(word.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn short_words_membership() {
        assert!(SHORT_WORDS.contains("A"));
        assert!(SHORT_WORDS.contains("OX"));
        assert!(!SHORT_WORDS.contains("XI"));
        assert!(!SHORT_WORDS.contains("B"));
    }
}
