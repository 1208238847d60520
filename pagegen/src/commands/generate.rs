//! Page generation command

use anyhow::{Context, Result};
use console::style;
use similar::{ChangeTag, TextDiff};
use std::path::PathBuf;

use pagegen::scaffold::{PageOutcome, PageScaffolder, PageStatus, ScaffoldMode};
use pagegen::ScaffoldConfig;

/// Command-line overrides for a generation run
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Configuration file to load instead of `./pagegen.toml`
    pub config: Option<PathBuf>,
    /// Base directory override
    pub base_dir: Option<PathBuf>,
    /// Template file override
    pub template: Option<PathBuf>,
    /// Run mode
    pub mode: ScaffoldMode,
}

/// Generate placeholder pages into the target project
pub struct GenerateCommand {
    scaffolder: PageScaffolder,
    mode: ScaffoldMode,
}

impl GenerateCommand {
    /// Load configuration, apply overrides and prepare the scaffolder
    pub fn new(options: &GenerateOptions) -> Result<Self> {
        let config = resolve_config(options)?;
        let scaffolder =
            PageScaffolder::from_config(&config).context("Failed to prepare page scaffolder")?;

        Ok(Self {
            scaffolder,
            mode: options.mode,
        })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        tracing::info!(
            base_dir = %self.scaffolder.base_dir().display(),
            pages = self.scaffolder.pages().len(),
            mode = ?self.mode,
            "scaffolding pages"
        );

        let report = self
            .scaffolder
            .run_with(self.mode, print_outcome)
            .context("Failed to generate pages")?;

        if self.mode == ScaffoldMode::Check {
            let drift = report.drift().count();
            if drift > 0 {
                anyhow::bail!(
                    "{drift} of {} pages are out of date; run pagegen to regenerate them",
                    report.outcomes.len()
                );
            }
        }

        Ok(())
    }

    /// Print the resolved page table
    pub fn list(&self) {
        for page in self.scaffolder.pages() {
            println!(
                "{}  {} {} {}",
                style(page.path.display()).cyan(),
                style(&page.title).bold(),
                style(format!("[{}]", page.table)).dim(),
                style(&page.condition).yellow()
            );
        }
    }
}

fn resolve_config(options: &GenerateOptions) -> Result<ScaffoldConfig> {
    let mut config = match &options.config {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            ScaffoldConfig::load_from(path)
        }
        None => ScaffoldConfig::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(base_dir) = &options.base_dir {
        config.base_dir.clone_from(base_dir);
    }
    if let Some(template) = &options.template {
        config.template_path = Some(template.clone());
    }

    Ok(config)
}

fn print_outcome(outcome: &PageOutcome) {
    println!("{}", outcome_line(outcome));
    if let PageStatus::Changed { existing } = &outcome.status {
        print_diff(existing, &outcome.content);
    }
}

/// Progress line for one page, e.g. `Generated /abs/path/page.tsx`
fn outcome_line(outcome: &PageOutcome) -> String {
    let label = match &outcome.status {
        PageStatus::Written => style("Generated").green().bold(),
        PageStatus::WouldWrite => style("Would generate").cyan().bold(),
        PageStatus::UpToDate => style("Up to date").green(),
        PageStatus::Missing => style("Missing").red().bold(),
        PageStatus::Changed { .. } => style("Changed").yellow().bold(),
        PageStatus::Superseded => style("Superseded").dim(),
    };
    format!("{label} {}", outcome.path.display())
}

fn print_diff(existing: &str, rendered: &str) {
    let diff = TextDiff::from_lines(existing, rendered);

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => print!("{}", style(format!("-{change}")).red()),
            ChangeTag::Insert => print!("{}", style(format!("+{change}")).green()),
            ChangeTag::Equal => {}
        }
    }
    println!();
}
