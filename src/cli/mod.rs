//! CLI command implementations

mod context;
mod generate;
mod style;

pub use generate::{GenerateOptions, run_generate};
