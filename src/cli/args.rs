//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Skill library curation, migration, and symlinking for AI coding assistants.
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root that anchors all relative paths.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify indexed skills as keep/review/remove and write a triage report.
    Analyze(AnalyzeArgs),

    /// Copy mapped skill directories into the categorized skills tree.
    Migrate(MigrateArgs),

    /// Create or refresh the skills symlink inside each tool directory.
    Link,

    /// Replace real skills directories inside tool directories with symlinks.
    Adopt,

    /// Show the link state of every tool directory.
    Status,
}

/// Arguments for the analyze command.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Skill index to read instead of the configured one.
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Report file to write instead of the configured one.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the migrate command.
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Flat source tree to copy from instead of the configured one.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Skills root to copy into instead of the configured one.
    #[arg(long)]
    pub dest: Option<PathBuf>,
}
