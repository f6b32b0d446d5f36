//! Core domain types for word grids
//!
//! This module contains the fundamental domain types. All types here are pure
//! values with no I/O.

mod grid;
mod word;

pub use grid::Grid;
pub use word::{ALPHABET_LEN, Word, WordError};
