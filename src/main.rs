//! Curator CLI - skill library housekeeping for AI coding assistants.

use std::process;

use anyhow::Result;
use clap::Parser;

use curator::cli::args::{AnalyzeArgs, MigrateArgs};
use curator::cli::{Cli, Command};
use curator::config::Config;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("✗ {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.root)?;

    match cli.command {
        Command::Analyze(args) => run_analyze(&config, args),
        Command::Migrate(args) => run_migrate(&config, args),
        Command::Link => curator::links::run_link(&config),
        Command::Adopt => curator::links::run_adopt(&config),
        Command::Status => curator::links::run_status(&config),
    }
}

fn run_analyze(config: &Config, args: AnalyzeArgs) -> Result<()> {
    let index = args.index.unwrap_or_else(|| config.index_path.clone());
    let report = args.out.unwrap_or_else(|| config.report_path.clone());
    curator::triage::run(&index, &report)?;
    Ok(())
}

fn run_migrate(config: &Config, args: MigrateArgs) -> Result<()> {
    let source = args.source.unwrap_or_else(|| config.source_dir.clone());
    let dest = args.dest.unwrap_or_else(|| config.skills_dir.clone());
    curator::migrate::run(&source, &dest)?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
