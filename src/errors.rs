//! Error types for a grid generation run
//!
//! Every variant is fatal: no partial index or partial output is produced.
//! Malformed dictionary entries are not errors; the indexer skips them.

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a grid generation run
#[derive(Debug, Error)]
pub enum GridError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("Error reading {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing grid: {0}")]
    Output(#[source] io::Error),
}
