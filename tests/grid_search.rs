use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use word_grid::commands::{GenerateConfig, run_generate};
use word_grid::config::{ConfigError, Dimensions, IndexOptions};
use word_grid::core::{Grid, Word};
use word_grid::dictionary::DictionaryIndex;
use word_grid::errors::GridError;
use word_grid::search::{GridSearch, search};

const UNRESTRICTED: IndexOptions = IndexOptions {
    strip_apostrophes: true,
    restrict_short_words: false,
};

fn build(width: usize, height: usize, words: &[String]) -> DictionaryIndex {
    DictionaryIndex::build(words, Dimensions::new(width, height).unwrap(), UNRESTRICTED)
}

fn rows_of(grids: &[Grid]) -> Vec<Vec<String>> {
    grids
        .iter()
        .map(|g| g.rows().iter().map(|w| w.text().to_string()).collect())
        .collect()
}

/// Random words over a small alphabet so that grids actually exist
fn random_dictionary(rng: &mut StdRng, lengths: &[usize], count: usize) -> Vec<String> {
    let alphabet = b"ABCDEFGH";
    (0..count)
        .map(|i| {
            let len = lengths[i % lengths.len()];
            (0..len)
                .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
                .collect()
        })
        .collect()
}

/// Every height-tuple of row words, in lexicographic order, kept when its
/// columns are column words and its letters are all distinct
fn brute_force(index: &DictionaryIndex, words: &[String]) -> Vec<Vec<String>> {
    let dims = index.dimensions();
    let columns: FxHashSet<String> = words
        .iter()
        .filter_map(|w| Word::new(w).ok())
        .filter(|w| w.len() == dims.height())
        .map(|w| w.text().to_string())
        .collect();

    let rows = index.rows();
    let mut found = Vec::new();
    if rows.is_empty() {
        return found;
    }

    let mut choice = vec![0usize; dims.height()];
    loop {
        let picked: Vec<&Word> = choice.iter().map(|&i| &rows[i]).collect();
        let mask = picked.iter().fold(0u32, |m, w| m | w.mask());
        let distinct = mask.count_ones() as usize == dims.cells();
        let columns_ok = (0..dims.width()).all(|c| {
            let column: String = picked.iter().map(|w| char::from(w.letter_at(c))).collect();
            columns.contains(&column)
        });
        if distinct && columns_ok {
            found.push(picked.iter().map(|w| w.text().to_string()).collect());
        }

        // Odometer increment, last row fastest
        let mut pos = dims.height();
        loop {
            if pos == 0 {
                return found;
            }
            pos -= 1;
            choice[pos] += 1;
            if choice[pos] < rows.len() {
                break;
            }
            choice[pos] = 0;
        }
    }
}

#[test]
fn matches_brute_force_on_random_dictionaries() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let shapes = [(2, 2), (2, 3), (3, 2), (1, 4), (3, 3), (4, 2)];

    let mut total_grids = 0;
    for &(width, height) in &shapes {
        for _ in 0..20 {
            let words = random_dictionary(&mut rng, &[width, height], 60);
            let index = build(width, height, &words);

            let grids = GridSearch::new(&index).collect_grids();
            assert_eq!(
                rows_of(&grids),
                brute_force(&index, &words),
                "{width}x{height} dictionary {words:?}"
            );
            total_grids += grids.len();
        }
    }
    assert!(total_grids > 0, "random dictionaries should produce some grids");
}

#[test]
fn emitted_grids_satisfy_all_constraints() {
    let mut rng = StdRng::seed_from_u64(42);
    let words = random_dictionary(&mut rng, &[2, 3], 120);
    let index = build(2, 3, &words);

    let row_set: FxHashSet<&str> = index.rows().iter().map(Word::text).collect();
    let grids = GridSearch::new(&index).collect_grids();

    for grid in &grids {
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert!(grid.has_unique_letters(), "repeated letter in\n{grid}");
        for row in grid.rows() {
            assert!(row_set.contains(row.text()));
        }
        for column in grid.columns() {
            assert!(index.prefixes().contains(column.as_bytes()));
        }
    }
}

#[test]
fn search_is_deterministic_and_restartable() {
    let mut rng = StdRng::seed_from_u64(7);
    let words = random_dictionary(&mut rng, &[3], 80);
    let index = build(3, 3, &words);

    let first = search(index.rows(), index.prefixes(), 3).collect::<Vec<_>>();
    let second = search(index.rows(), index.prefixes(), 3).collect::<Vec<_>>();
    assert_eq!(first, second);

    let mut shuffled = words.clone();
    shuffled.reverse();
    let reordered = build(3, 3, &shuffled);
    assert_eq!(first, GridSearch::new(&reordered).collect_grids());
}

#[test]
fn lexicographic_output_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let words = random_dictionary(&mut rng, &[2], 40);
    let index = build(2, 2, &words);

    let grids = GridSearch::new(&index).collect_grids();
    assert!(grids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn scenario_short_dictionary_without_square() {
    // Every column pairing of these words is missing from the dictionary
    let words: Vec<String> = ["AT", "OK", "TO", "KO"].iter().map(|s| (*s).to_string()).collect();
    let index = build(2, 2, &words);

    let rows: Vec<&str> = index.rows().iter().map(Word::text).collect();
    assert_eq!(rows, ["AT", "KO", "OK", "TO"]);
    assert!(GridSearch::new(&index).collect_grids().is_empty());
    assert_eq!(brute_force(&index, &words), Vec::<Vec<String>>::new());
}

#[test]
fn scenario_short_dictionary_with_squares() {
    let words: Vec<String> = ["AB", "CD", "AC", "BD"].iter().map(|s| (*s).to_string()).collect();
    let index = build(2, 2, &words);
    assert_eq!(
        rows_of(&GridSearch::new(&index).collect_grids()),
        [["AB", "CD"], ["AC", "BD"]]
    );
}

#[test]
fn scenario_no_completion_is_empty_not_error() {
    let words: Vec<String> = ["CAT", "DOG", "OWL", "ELK", "BUS"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    let index = build(3, 3, &words);
    assert!(!index.rows().is_empty());
    assert_eq!(GridSearch::new(&index).grids().count(), 0);
}

#[test]
fn scenario_apostrophes_rejected_when_not_stripped() {
    let options = IndexOptions {
        strip_apostrophes: false,
        restrict_short_words: true,
    };
    let index = DictionaryIndex::build(["DON'T"], Dimensions::new(5, 5).unwrap(), options);
    assert!(index.rows().is_empty());
    assert_eq!(index.prefixes().column_words(), 0);

    let index = DictionaryIndex::build(["DON'T"], Dimensions::new(4, 4).unwrap(), options);
    assert!(index.rows().is_empty());

    let stripped =
        DictionaryIndex::build(["DON'T"], Dimensions::new(4, 4).unwrap(), IndexOptions::default());
    assert_eq!(stripped.rows()[0].text(), "DONT");
}

#[test]
fn scenario_too_many_cells_fails_before_reading() {
    let err = GenerateConfig::new(3, 9)
        .map(|config| config.with_dictionary("/no/such/dictionary"))
        .unwrap_err();
    assert!(matches!(
        err,
        GridError::Configuration(ConfigError::TooManyCells {
            width: 3,
            height: 9
        })
    ));
}

#[test]
fn generate_end_to_end() {
    let path = std::env::temp_dir().join(format!("word_grid_it_{}.txt", std::process::id()));
    std::fs::write(&path, "ab\ncd\r\nac\nbd\nzz\nq'x\n").unwrap();

    let config = GenerateConfig::new(2, 2)
        .unwrap()
        .with_dictionary(&path)
        .with_options(UNRESTRICTED);
    let mut out = Vec::new();
    let result = run_generate(&config, &mut out).unwrap();
    std::fs::remove_file(&path).unwrap();

    let text = String::from_utf8(out).unwrap();
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks, ["AB\nCD", "AC\nBD"]);
    assert_eq!(result.search_stats.grids_found, 2);
    assert_eq!(result.index_stats.lines_read, 6);
    assert_eq!(result.index_stats.repeated_letters, 1);
    // "q'x" strips to "QX", a valid two-letter row word
    assert_eq!(result.row_candidates, 5);
}

#[test]
fn generate_skips_undecodable_lines() {
    let path = std::env::temp_dir().join(format!("word_grid_latin1_{}.txt", std::process::id()));
    std::fs::write(&path, b"ab\ncd\ncaf\xe9\nac\nbd\n").unwrap();

    let config = GenerateConfig::new(2, 2)
        .unwrap()
        .with_dictionary(&path)
        .with_options(UNRESTRICTED);
    let mut out = Vec::new();
    let result = run_generate(&config, &mut out).unwrap();
    std::fs::remove_file(&path).unwrap();

    let text = String::from_utf8(out).unwrap();
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks, ["AB\nCD", "AC\nBD"]);
    assert_eq!(result.index_stats.lines_read, 5);
    assert_eq!(result.index_stats.invalid_characters, 1);
    assert_eq!(result.row_candidates, 4);
}
