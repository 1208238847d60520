//! CLI command implementations

pub mod generate;

pub use generate::{GenerateCommand, GenerateOptions};
