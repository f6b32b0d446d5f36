//! Word representation
//!
//! A Word is an uppercase A–Z string in which no letter appears twice. Each word
//! carries a 26-bit letter mask so that "do these words share a letter" is one AND.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Number of distinct letters available to a grid
pub const ALPHABET_LEN: usize = 26;

/// A dictionary word with no repeated letters
///
/// Stores the uppercase text together with a bit set of its letters
/// (bit 0 = `A`, bit 25 = `Z`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    mask: u32,
}

/// Error type for entries that cannot become a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains a character outside A-Z: {0:?}")]
    InvalidCharacter(char),
    #[error("Word repeats the letter {0}")]
    RepeatedLetter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Any character falls outside A–Z after uppercasing
    /// - Any letter occurs more than once
    ///
    /// # Examples
    /// ```
    /// use word_grid::core::Word;
    ///
    /// let word = Word::new("dock").unwrap();
    /// assert_eq!(word.text(), "DOCK");
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("letter").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }

        let mut upper = String::with_capacity(raw.len());
        let mut mask = 0u32;
        for c in raw.chars() {
            let c = c.to_ascii_uppercase();
            if !c.is_ascii_uppercase() {
                return Err(WordError::InvalidCharacter(c));
            }

            let bit = letter_bit(c as u8);
            if mask & bit != 0 {
                return Err(WordError::RepeatedLetter(c));
            }
            mask |= bit;
            upper.push(c);
        }

        Ok(Self { text: upper, mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bit set of the letters in this word
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Check whether the two words have any letter in common
    #[inline]
    #[must_use]
    pub const fn shares_letter(&self, other: &Self) -> bool {
        self.mask & other.mask != 0
    }
}

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'A')
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
