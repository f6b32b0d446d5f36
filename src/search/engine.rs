//! Backtracking grid search
//!
//! Fills rows top to bottom. A candidate row is rejected as soon as any column
//! stops being a prefix of some column word; an accepted row narrows the
//! candidate list to words sharing no letter with it before descending.

use super::{GridState, Grids, SearchObserver, SearchStats};
use crate::core::{Grid, Word};
use crate::dictionary::{ColumnPrefixTable, DictionaryIndex};
use std::convert::Infallible;

/// Depth-first enumeration of every grid an index admits
///
/// Grids are produced in lexicographic order of their rows. The search only
/// borrows the index and can be run any number of times.
pub struct GridSearch<'a> {
    rows: &'a [Word],
    prefixes: &'a ColumnPrefixTable,
    height: usize,
}

impl<'a> GridSearch<'a> {
    /// Create a search over a built index
    #[must_use]
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self::from_parts(index.rows(), index.prefixes(), index.dimensions().height())
    }

    /// Create a search from a sorted row candidate list and a prefix table
    ///
    /// `rows` must be sorted and free of duplicates for the output order to be
    /// lexicographic. A `height` of zero produces no grids.
    #[must_use]
    pub const fn from_parts(
        rows: &'a [Word],
        prefixes: &'a ColumnPrefixTable,
        height: usize,
    ) -> Self {
        Self {
            rows,
            prefixes,
            height,
        }
    }

    /// Lazy iterator over all grids
    ///
    /// Each call starts a fresh enumeration.
    #[must_use]
    pub fn grids(&self) -> Grids<'a> {
        Grids::new(self.rows, self.prefixes, self.height)
    }

    /// Collect every grid into a vector
    #[must_use]
    pub fn collect_grids(&self) -> Vec<Grid> {
        self.grids().collect()
    }

    /// Run the search, handing each grid to `on_grid`
    pub fn for_each_grid<F>(&self, mut on_grid: F) -> SearchStats
    where
        F: FnMut(Grid),
    {
        let result = self.try_for_each_grid(&mut (), |grid| {
            on_grid(grid);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }

    /// Run the search, stopping at the first error returned by `on_grid`
    ///
    /// The observer sees every first-row candidate and the final counters,
    /// including when the search stops early.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `on_grid`.
    pub fn try_for_each_grid<O, F, E>(
        &self,
        observer: &mut O,
        mut on_grid: F,
    ) -> Result<SearchStats, E>
    where
        O: SearchObserver + ?Sized,
        F: FnMut(Grid) -> Result<(), E>,
    {
        let mut stats = SearchStats::default();
        let result = if self.height == 0 {
            Ok(())
        } else {
            let root = GridState::root(self.rows);
            self.descend(&root, observer, &mut stats, &mut on_grid)
        };

        observer.on_finish(&stats);
        log::debug!(
            "Search finished: {} grids, {} candidates examined, {} pruned, {} branches",
            stats.grids_found,
            stats.candidates_examined,
            stats.prefix_rejections,
            stats.branches
        );
        result.map(|()| stats)
    }

    fn descend<O, F, E>(
        &self,
        state: &GridState<'a>,
        observer: &mut O,
        stats: &mut SearchStats,
        on_grid: &mut F,
    ) -> Result<(), E>
    where
        O: SearchObserver + ?Sized,
        F: FnMut(Grid) -> Result<(), E>,
    {
        let depth = state.depth();
        let last_row = depth + 1 == self.height;
        let total = state.remaining().len();

        for (index, &word) in state.remaining().iter().enumerate() {
            if depth == 0 {
                observer.on_first_row(word, index, total);
            }
            stats.candidates_examined += 1;

            if !state.accepts(word, self.prefixes) {
                stats.prefix_rejections += 1;
                continue;
            }

            if last_row {
                stats.grids_found += 1;
                on_grid(state.complete(word))?;
                continue;
            }

            stats.branches += 1;
            self.descend(&state.extend(word), observer, stats, on_grid)?;
        }

        Ok(())
    }
}
