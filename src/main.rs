//! Word Grid - CLI
//!
//! Prints every WIDTH × HEIGHT grid whose rows and columns are dictionary words
//! and whose letters are all distinct.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use word_grid::{
    commands::{GenerateConfig, run_generate},
    config::{DEFAULT_DICTIONARY, IndexOptions},
    logging::init_logger,
    output::print_generate_summary,
};

#[derive(Parser)]
#[command(
    name = "word_grid",
    about = "Word grid generator",
    long_about = "Word grid generator\n\nPrints every grid whose rows and columns are \
                  dictionary words with no letter used twice. Width × Height must be ≤ 26.",
    version,
    author
)]
struct Cli {
    /// Width of the grid (length of each row word)
    width: usize,

    /// Height of the grid (length of each column word)
    height: usize,

    /// Dictionary file, one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Don't generate words with apostrophes
    #[arg(short = 'n', long)]
    no_apostrophe: bool,

    /// Don't restrict small (≤ 2 letters) words to the built-in list
    #[arg(short = 's', long)]
    small_words: bool,

    /// Show a progress bar over first-row candidates
    #[arg(long)]
    progress: bool,

    /// Print a search summary to stderr when done
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = IndexOptions {
        strip_apostrophes: !cli.no_apostrophe,
        restrict_short_words: !cli.small_words,
    };
    let config = GenerateConfig::new(cli.width, cli.height)?
        .with_dictionary(cli.dictionary)
        .with_options(options)
        .with_progress(cli.progress);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run_generate(&config, &mut out)?;

    if cli.stats {
        print_generate_summary(&result);
    }
    Ok(())
}
