//! Lazy grid enumeration
//!
//! Walks the same tree as the recursive engine, in the same order, keeping the
//! path as an explicit stack of states so grids can be pulled one at a time.

use super::GridState;
use crate::core::{Grid, Word};
use crate::dictionary::ColumnPrefixTable;
use std::iter::FusedIterator;

struct Frame<'a> {
    state: GridState<'a>,
    next: usize,
}

/// Iterator over completed grids, in lexicographic order of rows
pub struct Grids<'a> {
    prefixes: &'a ColumnPrefixTable,
    height: usize,
    stack: Vec<Frame<'a>>,
}

impl<'a> Grids<'a> {
    pub(crate) fn new(rows: &'a [Word], prefixes: &'a ColumnPrefixTable, height: usize) -> Self {
        let mut stack = Vec::with_capacity(height);
        if height > 0 {
            stack.push(Frame {
                state: GridState::root(rows),
                next: 0,
            });
        }
        Self {
            prefixes,
            height,
            stack,
        }
    }
}

impl Iterator for Grids<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        while let Some(frame) = self.stack.last_mut() {
            let Some(&word) = frame.state.remaining().get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            if !frame.state.accepts(word, self.prefixes) {
                continue;
            }

            if frame.state.depth() + 1 == self.height {
                return Some(frame.state.complete(word));
            }

            let child = frame.state.extend(word);
            self.stack.push(Frame {
                state: child,
                next: 0,
            });
        }
        None
    }
}

impl FusedIterator for Grids<'_> {}
