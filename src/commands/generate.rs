//! Grid generation command
//!
//! Loads the dictionary, runs the search and streams every grid to a writer.

use crate::config::{DEFAULT_DICTIONARY, Dimensions, IndexOptions};
use crate::core::Word;
use crate::dictionary::{IndexStats, load_dictionary};
use crate::errors::GridError;
use crate::output::write_grid;
use crate::search::{GridSearch, SearchObserver, SearchStats};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a generate run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub dimensions: Dimensions,
    pub dictionary: PathBuf,
    pub options: IndexOptions,
    pub show_progress: bool,
}

impl GenerateConfig {
    /// Validate dimensions and use the default dictionary and options
    ///
    /// # Errors
    ///
    /// Returns `GridError::Configuration` if the dimensions are invalid. No
    /// file is touched.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            dimensions: Dimensions::new(width, height)?,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            options: IndexOptions::default(),
            show_progress: false,
        })
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: impl Into<PathBuf>) -> Self {
        self.dictionary = dictionary.into();
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: IndexOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Result of a generate run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub dimensions: Dimensions,
    pub row_candidates: usize,
    pub column_words: usize,
    pub index_stats: IndexStats,
    pub search_stats: SearchStats,
    pub duration: Duration,
}

/// Progress bar over first-row candidates
struct ProgressObserver {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressObserver {
    const fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }
}

impl SearchObserver for ProgressObserver {
    fn on_first_row(&mut self, word: &Word, index: usize, total: usize) {
        if !self.enabled {
            return;
        }
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            {
                bar.set_style(style.progress_chars("█▓▒░"));
            }
            bar
        });
        bar.set_position(index as u64);
        bar.set_message(word.to_string());
    }

    fn on_finish(&mut self, _stats: &SearchStats) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Generate every grid for `config`, writing each to `out` as it is found
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary cannot be opened or read (`GridError::DictionaryRead`)
/// - Writing a grid to `out` fails (`GridError::Output`)
pub fn run_generate<W: Write + ?Sized>(
    config: &GenerateConfig,
    out: &mut W,
) -> Result<GenerateResult, GridError> {
    let start = Instant::now();
    let index = load_dictionary(&config.dictionary, config.dimensions, config.options)?;

    log::info!(
        "Searching {} × {} grids",
        config.dimensions.width(),
        config.dimensions.height()
    );

    let mut observer = ProgressObserver::new(config.show_progress);
    let search_stats = GridSearch::new(&index)
        .try_for_each_grid(&mut observer, |grid| write_grid(&mut *out, &grid))
        .map_err(GridError::Output)?;

    Ok(GenerateResult {
        dimensions: config.dimensions,
        row_candidates: index.rows().len(),
        column_words: index.prefixes().column_words(),
        index_stats: index.stats(),
        search_stats,
        duration: start.elapsed(),
    })
}
