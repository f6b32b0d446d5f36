//! Grid and summary output
//!
//! Grids go to the caller's writer in blank-line-delimited blocks; run
//! summaries go to the terminal.

pub mod display;
pub mod formatters;

pub use display::print_generate_summary;
pub use formatters::write_grid;
