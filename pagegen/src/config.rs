//! Configuration for pagegen
//!
//! Configuration is layered with clear precedence:
//!
//! 1. Environment variables (highest priority, `PAGEGEN_` prefix)
//! 2. The configuration file (`./pagegen.toml` unless another is given)
//! 3. Hardcoded defaults (fallback)
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Example Configuration
//!
//! ```toml
//! # pagegen.toml
//! base_dir = "../invo"
//! template_path = "templates/page.tsx"
//!
//! [[pages]]
//! path = "src/app/payroll/contracts/page.tsx"
//! title = "Contracts"
//! table = "payroll_contracts"
//! condition = "true"
//! ```
//!
//! When `pages` is empty the built-in page table is used. Relative
//! `base_dir` and `template_path` values from a file are resolved against
//! that file's directory; values from the environment stay relative to
//! the current directory.

use figment::{
    providers::{Env, Format, Toml},
    Figment, Source,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pages::{builtin_pages, PageDefinition};
use crate::template::PageTemplate;

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "pagegen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PAGEGEN_";

/// Scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Root of the target web project
    pub base_dir: PathBuf,

    /// Template file overriding the built-in page template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// Pages to generate; empty means the built-in table
    pub pages: Vec<PageDefinition>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            template_path: None,
            pages: Vec::new(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from `./pagegen.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from a specific file and the environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::extract(Self::figment(path)?.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true)))
    }

    fn figment(path: &Path) -> Result<Figment> {
        Ok(Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let mut config: Self = figment.extract()?;

        config.base_dir = relative_to_source(&figment, "base_dir", config.base_dir);
        config.template_path = config
            .template_path
            .map(|path| relative_to_source(&figment, "template_path", path));

        Ok(config)
    }

    /// Pages to generate, falling back to the built-in table
    #[must_use]
    pub fn resolved_pages(&self) -> Vec<PageDefinition> {
        if self.pages.is_empty() {
            builtin_pages()
        } else {
            self.pages.clone()
        }
    }

    /// Template to render, falling back to the built-in page
    ///
    /// # Errors
    ///
    /// Returns an error if `template_path` is set and cannot be read.
    pub fn resolved_template(&self) -> Result<PageTemplate> {
        self.template_path
            .as_deref()
            .map_or_else(|| Ok(PageTemplate::builtin()), PageTemplate::load)
    }
}

/// Resolve a relative path against the directory of the file that set it
fn relative_to_source(figment: &Figment, key: &str, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }

    let file_dir = figment
        .find_metadata(key)
        .and_then(|metadata| match &metadata.source {
            Some(Source::File(file)) => file.parent(),
            _ => None,
        });

    match file_dir {
        Some(dir) => dir.join(path),
        None => path,
    }
}
