//! Search counters

/// Work done by one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate words tried at any depth
    pub candidates_examined: u64,
    /// Candidates rejected because some column stopped being a valid prefix
    pub prefix_rejections: u64,
    /// Partial grids descended into
    pub branches: u64,
    /// Completed grids emitted
    pub grids_found: u64,
}

impl SearchStats {
    /// Fraction of examined candidates cut by the column prefix check
    #[must_use]
    pub fn prune_ratio(&self) -> f64 {
        if self.candidates_examined == 0 {
            0.0
        } else {
            self.prefix_rejections as f64 / self.candidates_examined as f64
        }
    }
}
