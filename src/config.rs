//! Run configuration
//!
//! Grid dimensions and dictionary filtering options, validated before any
//! dictionary access happens.

use crate::core::ALPHABET_LEN;
use thiserror::Error;

/// Dictionary used when none is given on the command line
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Invalid grid dimensions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Width is too small. Must be > 0")]
    ZeroWidth,
    #[error("Height is too small. Must be > 0")]
    ZeroHeight,
    #[error("Width × Height is too large. Must be ≤ 26")]
    TooManyCells { width: usize, height: usize },
}

/// Validated grid dimensions
///
/// Both sides are positive and `width * height <= 26`, so every completed grid
/// can use each letter at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Validate a width and height
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either side is zero or the grid would need more
    /// than 26 distinct letters.
    ///
    /// # Examples
    /// ```
    /// use word_grid::config::Dimensions;
    ///
    /// assert!(Dimensions::new(5, 5).is_ok());
    /// assert!(Dimensions::new(3, 9).is_err());
    /// ```
    pub const fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= ALPHABET_LEN => Ok(Self { width, height }),
            _ => Err(ConfigError::TooManyCells { width, height }),
        }
    }

    /// Row word length
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Column word length
    #[inline]
    #[must_use]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Number of cells in the grid
    #[inline]
    #[must_use]
    pub const fn cells(self) -> usize {
        self.width * self.height
    }
}

/// Dictionary filtering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Remove apostrophes before validation so "don't" indexes as "DONT".
    /// When off, entries with apostrophes are rejected.
    pub strip_apostrophes: bool,
    /// Only accept words of one or two letters from the built-in allow-list
    pub restrict_short_words: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            strip_apostrophes: true,
            restrict_short_words: true,
        }
    }
}
