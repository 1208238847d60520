//! Page scaffolding
//!
//! Turns a table of page definitions into files under a project root.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagegen::scaffold::{PageScaffolder, ScaffoldMode};
//! use pagegen::pages::builtin_pages;
//! use pagegen::template::PageTemplate;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), pagegen::ScaffoldError> {
//! let scaffolder = PageScaffolder::new(Path::new("../invo"), PageTemplate::builtin(), builtin_pages())?;
//! for outcome in scaffolder.run(ScaffoldMode::Write)?.outcomes {
//!     println!("Generated {}", outcome.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod generator;

pub use generator::{PageOutcome, PageScaffolder, PageStatus, ScaffoldMode, ScaffoldReport};
