//! Backtracking grid search
//!
//! Two front ends over one algorithm: a recursive callback engine
//! ([`GridSearch::try_for_each_grid`]) and a lazy iterator ([`Grids`]).
//! Both emit the same grids in the same order.

mod engine;
mod iter;
mod observer;
mod state;
mod stats;

pub use engine::GridSearch;
pub use iter::Grids;
pub use observer::SearchObserver;
pub use state::GridState;
pub use stats::SearchStats;

use crate::core::Word;
use crate::dictionary::ColumnPrefixTable;

/// Enumerate every grid whose rows come from `candidates` and whose columns
/// complete entries of `prefixes`
///
/// `candidates` must be sorted and free of duplicates. The inputs are only
/// borrowed; calling this again restarts the enumeration from the beginning.
///
/// # Examples
/// ```
/// use word_grid::core::Word;
/// use word_grid::dictionary::ColumnPrefixTable;
/// use word_grid::search::search;
///
/// let rows: Vec<Word> = ["AB", "CD"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let mut columns = ColumnPrefixTable::new(2);
/// for w in ["AC", "BD"] {
///     columns.insert(&Word::new(w).unwrap());
/// }
///
/// let grids: Vec<String> = search(&rows, &columns, 2).map(|g| g.to_string()).collect();
/// assert_eq!(grids, ["AB\nCD"]);
/// ```
#[must_use]
pub fn search<'a>(
    candidates: &'a [Word],
    prefixes: &'a ColumnPrefixTable,
    height: usize,
) -> Grids<'a> {
    Grids::new(candidates, prefixes, height)
}
