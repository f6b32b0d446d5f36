//! Word Grid
//!
//! Enumerates grids in which every row and every column is a dictionary word and
//! no letter is used twice anywhere in the grid.
//!
//! # Quick Start
//!
//! ```rust
//! use word_grid::config::{Dimensions, IndexOptions};
//! use word_grid::dictionary::DictionaryIndex;
//! use word_grid::search::GridSearch;
//!
//! let dims = Dimensions::new(2, 2).unwrap();
//! let index = DictionaryIndex::build(["ab", "cd", "ac", "bd"], dims, IndexOptions {
//!     strip_apostrophes: true,
//!     restrict_short_words: false,
//! });
//!
//! for grid in GridSearch::new(&index).grids() {
//!     println!("{grid}\n");
//! }
//! ```

// Core domain types
pub mod core;

// Dimensions and filtering options
pub mod config;

// Error types
pub mod errors;

// Dictionary indexing
pub mod dictionary;

// Backtracking search
pub mod search;

// Command implementations
pub mod commands;

// Grid and summary output
pub mod output;

// Logger setup
pub mod logging;
