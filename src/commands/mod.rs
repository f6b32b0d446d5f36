//! Command implementations

pub mod generate;

pub use generate::{GenerateConfig, GenerateResult, run_generate};
