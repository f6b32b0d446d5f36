//! Display functions for command results

use super::formatters::group_digits;
use crate::commands::GenerateResult;
use colored::Colorize;

/// Print the summary of a generate run to stderr
pub fn print_generate_summary(result: &GenerateResult) {
    eprintln!("\n{}", "═".repeat(60).cyan());
    eprintln!(
        " {} {} ",
        "WORD GRID SEARCH:".bright_cyan().bold(),
        format!("{} × {}", result.dimensions.width(), result.dimensions.height())
            .bright_yellow()
            .bold()
    );
    eprintln!("{}", "═".repeat(60).cyan());

    let index = &result.index_stats;
    eprintln!("\n📖 {}", "Dictionary:".bright_cyan().bold());
    eprintln!("   Lines read:        {}", group_digits(index.lines_read as u64));
    eprintln!("   Accepted:          {}", group_digits(index.accepted as u64));
    eprintln!(
        "   Rejected:          {} ({} invalid, {} repeated letters, {} short)",
        group_digits(index.rejected() as u64),
        index.invalid_characters,
        index.repeated_letters,
        index.short_words
    );
    eprintln!("   Row candidates:    {}", result.row_candidates);
    eprintln!("   Column words:      {}", result.column_words);

    let search = &result.search_stats;
    eprintln!("\n🔎 {}", "Search:".bright_cyan().bold());
    eprintln!(
        "   Candidates tried:  {}",
        group_digits(search.candidates_examined)
    );
    eprintln!(
        "   Pruned by columns: {} ({:.1}%)",
        group_digits(search.prefix_rejections),
        search.prune_ratio() * 100.0
    );
    eprintln!("   Branches:          {}", group_digits(search.branches));
    eprintln!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    eprintln!();
    if search.grids_found > 0 {
        eprintln!(
            "{}",
            format!("✅ Found {} grids", group_digits(search.grids_found))
                .green()
                .bold()
        );
    } else {
        eprintln!("{}", "❌ No grids found".red().bold());
    }
}
