//! Symlink bookkeeping module.
//!
//! Keeps every configured tool directory pointing at the canonical skills
//! root through a `skills` symlink.

pub mod ops;
pub mod relpath;

pub use ops::{adopt_dir, ensure_link, inspect, LinkError, LinkOutcome, LinkState, SKILLS_LINK};
pub use relpath::relative_from;

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use crate::config::Config;

/// Create or refresh the skills symlink in every tool directory.
pub fn run_link(config: &Config) -> Result<()> {
    banner("Setting up skills symlinks");

    for tool_dir in &config.tool_dirs {
        if !tool_dir.exists() {
            println!("⊘ Skipped (not found): {}", tool_dir.display());
            continue;
        }

        let link = tool_dir.join(SKILLS_LINK);
        match ensure_link(tool_dir, &config.skills_dir) {
            Ok(outcome) => print_outcome(&link, &outcome),
            Err(LinkError::IsRealDirectory(path)) => {
                println!(
                    "⊘ {} is a directory, not a symlink - cannot replace",
                    path.display()
                );
            }
            Err(err) => {
                warn!(tool_dir = %tool_dir.display(), "link failed: {err}");
                println!("✗ Failed to create symlink: {} - {}", link.display(), err);
            }
        }
    }

    print_verification(config);
    Ok(())
}

/// Replace real skills directories with symlinks in every tool directory.
pub fn run_adopt(config: &Config) -> Result<()> {
    banner("Replacing skills directories with symlinks");

    for tool_dir in &config.tool_dirs {
        if !tool_dir.exists() {
            println!("⊘ Skipped (not found): {}", tool_dir.display());
            continue;
        }

        let link = tool_dir.join(SKILLS_LINK);
        match adopt_dir(tool_dir, &config.skills_dir) {
            Ok(outcome) => print_outcome(&link, &outcome),
            Err(LinkError::MissingSkillsRoot(root)) => {
                println!(
                    "⊘ Refusing to remove {}: skills root {} does not exist",
                    link.display(),
                    root.display()
                );
            }
            Err(err) => {
                warn!(tool_dir = %tool_dir.display(), "adopt failed: {err}");
                println!("✗ Failed to replace {}: {}", link.display(), err);
            }
        }
    }

    print_verification(config);
    Ok(())
}

/// Report the link state of every tool directory without modifying anything.
pub fn run_status(config: &Config) -> Result<()> {
    banner("Skills link status");

    if config.skills_dir.is_dir() {
        println!("✓ Skills root: {}", config.skills_dir.display());
    } else {
        println!("✗ Skills root missing: {}", config.skills_dir.display());
    }
    println!();

    for tool_dir in &config.tool_dirs {
        if !tool_dir.exists() {
            println!("  ⊘ {} (tool directory not found)", tool_dir.display());
            continue;
        }
        print_state(tool_dir);
    }

    Ok(())
}

fn print_outcome(link: &Path, outcome: &LinkOutcome) {
    match outcome {
        LinkOutcome::Created { target } => {
            println!("✓ Created symlink: {} → {}", link.display(), target.display());
        }
        LinkOutcome::Refreshed { target } => {
            println!("✓ Replaced old symlink: {} → {}", link.display(), target.display());
        }
        LinkOutcome::AlreadyLinked { .. } => {
            println!("✓ Already a symlink: {}", link.display());
        }
        LinkOutcome::Adopted { target } => {
            println!(
                "✓ Replaced directory with symlink: {} → {}",
                link.display(),
                target.display()
            );
        }
        LinkOutcome::NoEntry => {
            println!("⊘ {} does not exist", link.display());
        }
    }
}

fn print_verification(config: &Config) {
    println!("\n{}", "=".repeat(50));
    println!("Verifying symlinks:");
    println!("{}", "=".repeat(50));

    for tool_dir in &config.tool_dirs {
        if !tool_dir.exists() {
            continue;
        }
        print_state(tool_dir);
    }
}

fn print_state(tool_dir: &Path) {
    let link = tool_dir.join(SKILLS_LINK);
    match inspect(tool_dir) {
        LinkState::Linked(target) => {
            println!("  ✓ {} → {}", link.display(), target.display());
        }
        LinkState::RealDirectory => {
            println!("  ⊘ {} is a directory (not a symlink)", link.display());
        }
        LinkState::Other => {
            println!("  ✗ {} is not a symlink", link.display());
        }
        LinkState::Missing => {
            println!("  ✗ {} does not exist", link.display());
        }
    }
}

fn banner(title: &str) {
    println!("{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}
