//! pagegen CLI tool
//!
//! Running `pagegen` with no arguments writes every built-in page under the
//! configured base directory (the current directory by default).

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};
use commands::{GenerateCommand, GenerateOptions};
use pagegen::{observability, ScaffoldMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagegen")]
#[command(version)]
#[command(about = "Scaffold placeholder purchasing and payroll pages", long_about = None)]
struct Cli {
    /// Root of the target web project
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Configuration file (defaults to ./pagegen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Template file replacing the built-in page template
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Render every page without writing anything
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Fail if any generated page is missing or differs from disk
    #[arg(long)]
    check: bool,

    /// Print the page table and exit
    #[arg(long, conflicts_with_all = ["dry_run", "check"])]
    list: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    const fn mode(&self) -> ScaffoldMode {
        if self.check {
            ScaffoldMode::Check
        } else if self.dry_run {
            ScaffoldMode::DryRun
        } else {
            ScaffoldMode::Write
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let cmd = GenerateCommand::new(&GenerateOptions {
        mode: cli.mode(),
        config: cli.config,
        base_dir: cli.base_dir,
        template: cli.template,
    })?;

    if cli.list {
        cmd.list();
    } else {
        cmd.execute()?;
    }

    Ok(())
}
