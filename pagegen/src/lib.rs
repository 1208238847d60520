//! pagegen library
//!
//! Scaffolds placeholder purchasing, supplier and payroll pages into an
//! ERP web project by filling one shared template per page definition.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod pages;
pub mod scaffold;
pub mod template;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use pages::PageDefinition;
pub use scaffold::{PageScaffolder, ScaffoldMode};
pub use template::PageTemplate;
