//! Error types for page scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or writing pages
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A parent directory of an output file could not be created
    #[error("failed to create directory '{path}': {source}")]
    CreateDirectory {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// A generated page could not be written
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// The file that could not be written
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// An existing page or a template override could not be read
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The base directory could not be made absolute
    #[error("failed to resolve base directory '{path}': {source}")]
    ResolveBaseDir {
        /// The configured base directory
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Configuration could not be loaded or extracted
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Built-in defaults could not be serialized for layering
    #[error("failed to serialize default configuration: {0}")]
    SerializeDefaults(#[from] toml::ser::Error),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias used throughout the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
