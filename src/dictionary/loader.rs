//! Dictionary loading
//!
//! Opens a word list on disk and indexes it in one streaming pass.

use super::DictionaryIndex;
use crate::config::{Dimensions, IndexOptions};
use crate::errors::GridError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and index a dictionary file
///
/// # Errors
///
/// Returns `GridError::DictionaryRead` if the file cannot be opened or a read
/// fails partway through.
///
/// # Examples
/// ```no_run
/// use word_grid::config::{Dimensions, IndexOptions};
/// use word_grid::dictionary::load_dictionary;
///
/// let dims = Dimensions::new(4, 4).unwrap();
/// let index = load_dictionary("/usr/share/dict/words", dims, IndexOptions::default()).unwrap();
/// println!("Loaded {} row candidates", index.rows().len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    dimensions: Dimensions,
    options: IndexOptions,
) -> Result<DictionaryIndex, GridError> {
    let path = path.as_ref();
    let read_error = |source| GridError::DictionaryRead {
        path: path.to_path_buf(),
        source,
    };

    log::debug!("Reading dictionary {}", path.display());
    let file = File::open(path).map_err(read_error)?;
    let index =
        DictionaryIndex::from_reader(BufReader::new(file), dimensions, options).map_err(read_error)?;

    log::info!(
        "Loaded {} row candidates and {} column words from {}",
        index.rows().len(),
        index.prefixes().column_words(),
        path.display()
    );
    Ok(index)
}
