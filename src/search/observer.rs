//! Search progress hooks

use super::SearchStats;
use crate::core::Word;

/// Receives progress notifications from [`GridSearch::try_for_each_grid`]
///
/// All methods default to doing nothing. The unit type is the no-op observer.
///
/// [`GridSearch::try_for_each_grid`]: super::GridSearch::try_for_each_grid
pub trait SearchObserver {
    /// Called before each top-level candidate is tried as the first row
    ///
    /// `index` counts from 0 up to `total - 1`.
    fn on_first_row(&mut self, _word: &Word, _index: usize, _total: usize) {}

    /// Called once when the search has finished or been aborted
    fn on_finish(&mut self, _stats: &SearchStats) {}
}

impl SearchObserver for () {}
