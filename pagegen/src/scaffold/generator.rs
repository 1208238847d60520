//! Page scaffold generator
//!
//! Renders every page definition through the template and writes the
//! result under the base directory. Pages are processed in table order;
//! the first failure aborts the run and leaves earlier files in place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::pages::{duplicate_paths, superseded, PageDefinition};
use crate::template::PageTemplate;

/// What a run does with the rendered pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaffoldMode {
    /// Write every page, overwriting existing files
    #[default]
    Write,
    /// Render every page but touch nothing
    DryRun,
    /// Compare rendered pages with the files on disk
    Check,
}

/// Result of processing a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// The file was written
    Written,
    /// The file would be written (dry run)
    WouldWrite,
    /// The file on disk matches the rendered page
    UpToDate,
    /// No file exists at the output path
    Missing,
    /// The file on disk differs from the rendered page
    Changed {
        /// Current contents of the file
        existing: String,
    },
    /// A later page owns the same path, so this one is not compared
    Superseded,
}

impl PageStatus {
    /// Whether a check run should fail because of this page
    #[must_use]
    pub const fn is_drift(&self) -> bool {
        matches!(self, Self::Missing | Self::Changed { .. })
    }
}

/// One processed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// Absolute output path
    pub path: PathBuf,
    /// Rendered page contents
    pub content: String,
    /// What happened to the page
    pub status: PageStatus,
}

/// Outcomes of a whole run, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Per-page outcomes
    pub outcomes: Vec<PageOutcome>,
}

impl ScaffoldReport {
    /// Pages that are missing or changed on disk
    pub fn drift(&self) -> impl Iterator<Item = &PageOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_drift())
    }

    /// Whether every checked page matched the disk
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.drift().next().is_none()
    }
}

/// Page scaffold generator
pub struct PageScaffolder {
    /// Absolute root of the target project
    base_dir: PathBuf,
    /// Template shared by every page
    template: PageTemplate,
    /// Pages in generation order
    pages: Vec<PageDefinition>,
}

impl PageScaffolder {
    /// Create a new scaffolder
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Root of the target project; made absolute against the current directory
    /// * `template` - Template rendered for every page
    /// * `pages` - Page definitions, processed in order
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ResolveBaseDir`] if the base directory cannot
    /// be made absolute.
    pub fn new(base_dir: &Path, template: PageTemplate, pages: Vec<PageDefinition>) -> Result<Self> {
        let base_dir = std::path::absolute(base_dir).map_err(|source| ScaffoldError::ResolveBaseDir {
            path: base_dir.to_path_buf(),
            source,
        })?;

        for path in duplicate_paths(&pages) {
            tracing::warn!(
                path = %path.display(),
                "output path listed more than once; the last definition wins"
            );
        }

        let missing = template.missing_markers();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|m| m.name()).collect();
            tracing::warn!(markers = ?names, "template does not use every marker");
        }

        Ok(Self {
            base_dir,
            template,
            pages,
        })
    }

    /// Create a scaffolder from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the template override cannot be read or the base
    /// directory cannot be resolved.
    pub fn from_config(config: &ScaffoldConfig) -> Result<Self> {
        Self::new(
            &config.base_dir,
            config.resolved_template()?,
            config.resolved_pages(),
        )
    }

    /// Absolute root of the target project
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Pages in generation order
    #[must_use]
    pub fn pages(&self) -> &[PageDefinition] {
        &self.pages
    }

    /// Absolute output path of a page
    #[must_use]
    pub fn output_path(&self, page: &PageDefinition) -> PathBuf {
        self.base_dir.join(&page.path)
    }

    /// Render a single page
    #[must_use]
    pub fn render(&self, page: &PageDefinition) -> String {
        self.template.render(page)
    }

    /// Process every page
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error; pages before it have already
    /// been processed.
    pub fn run(&self, mode: ScaffoldMode) -> Result<ScaffoldReport> {
        self.run_with(mode, |_| {})
    }

    /// Process every page, calling `on_page` as soon as each one is done
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error; `on_page` has been called for
    /// every page before it.
    pub fn run_with(
        &self,
        mode: ScaffoldMode,
        mut on_page: impl FnMut(&PageOutcome),
    ) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        let overwritten = superseded(&self.pages);

        for (page, overwritten) in self.pages.iter().zip(overwritten) {
            let outcome = if overwritten && mode != ScaffoldMode::Write {
                PageOutcome {
                    path: self.output_path(page),
                    content: self.render(page),
                    status: PageStatus::Superseded,
                }
            } else {
                self.process(page, mode)?
            };
            on_page(&outcome);
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn process(&self, page: &PageDefinition, mode: ScaffoldMode) -> Result<PageOutcome> {
        let path = self.output_path(page);
        let content = self.render(page);
        tracing::debug!(path = %path.display(), title = %page.title, "rendered page");

        let status = match mode {
            ScaffoldMode::Write => {
                write_page(&path, &content)?;
                tracing::info!(path = %path.display(), bytes = content.len(), "wrote page");
                PageStatus::Written
            }
            ScaffoldMode::DryRun => PageStatus::WouldWrite,
            ScaffoldMode::Check => compare_page(&path, &content)?,
        };

        Ok(PageOutcome {
            path,
            content,
            status,
        })
    }
}

/// Write a page, creating missing parent directories
fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

fn compare_page(path: &Path, content: &str) -> Result<PageStatus> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == content => Ok(PageStatus::UpToDate),
        Ok(existing) => Ok(PageStatus::Changed { existing }),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(PageStatus::Missing),
        Err(source) => Err(ScaffoldError::ReadFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
