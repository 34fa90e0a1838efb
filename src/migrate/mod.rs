//! Skill migration module.
//!
//! Copies mapped skill directories from the flat source tree into the
//! categorized skills root.

pub mod copy;
pub mod mapping;

pub use copy::copy_dir;
pub use mapping::destination_for;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

use mapping::{CATEGORY_LAYOUT, SKILL_DESTINATIONS};

/// Outcome of a migration run.
#[derive(Debug, Default)]
pub struct MigrationSummary {
    /// Directories copied successfully.
    pub migrated: usize,
    /// Directories whose copy failed.
    pub failed: usize,
    /// Source directories with no mapping entry, sorted.
    pub unmapped: Vec<String>,
}

/// Run the full migration: create the category layout, then copy every
/// mapped skill directory. Per-item failures are reported and skipped.
pub fn run(source: &Path, dest: &Path) -> Result<MigrationSummary> {
    println!("{}", "=".repeat(60));
    println!("SKILLS MIGRATION");
    println!("{}", "=".repeat(60));
    println!("\nSource: {}", source.display());
    println!("Destination: {}", dest.display());

    if !source.is_dir() {
        bail!("Source directory not found: {}", source.display());
    }
    if source == dest {
        bail!("Source and destination are the same: {}", source.display());
    }

    println!("\n[1/3] Creating folder structure...");
    create_layout(dest)?;

    println!("\n[2/3] Loading skill mapping...");
    println!("Mapped {} skills", SKILL_DESTINATIONS.len());

    println!("\n[3/3] Migrating skills...");
    let summary = migrate_all(source, dest)?;

    print_summary(&summary);
    Ok(summary)
}

/// Create the fixed category folders under the skills root.
pub fn create_layout(dest: &Path) -> Result<()> {
    for folder in CATEGORY_LAYOUT {
        let path = dest.join(folder);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        println!("✓ Created: {}", path.display());
    }
    Ok(())
}

fn migrate_all(source: &Path, dest: &Path) -> Result<MigrationSummary> {
    let mut summary = MigrationSummary::default();

    let mut entries: Vec<_> = fs::read_dir(source)
        .with_context(|| format!("Failed to read {}", source.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let id = entry.file_name().to_string_lossy().to_string();
        let Some(folder) = destination_for(&id) else {
            summary.unmapped.push(id);
            continue;
        };

        let target = dest.join(folder).join(&id);
        match migrate_one(&entry.path(), &target) {
            Ok(()) => {
                println!("✓ Migrated: {id} → {folder}/");
                summary.migrated += 1;
            }
            Err(err) => {
                warn!(skill = %id, "migration failed: {err:#}");
                println!("✗ Error migrating {id}: {err:#}");
                summary.failed += 1;
            }
        }
    }

    summary.unmapped.sort();
    Ok(summary)
}

/// Copy one skill directory, replacing any existing copy at the target.
fn migrate_one(src: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_dir_all(target)
            .with_context(|| format!("Failed to remove existing {}", target.display()))?;
    }
    copy_dir(src, target)
}

fn print_summary(summary: &MigrationSummary) {
    println!("\n{}", "=".repeat(50));
    println!("Migration Summary");
    println!("{}", "=".repeat(50));
    println!("✓ Successfully migrated: {} skills", summary.migrated);
    if summary.failed > 0 {
        println!("✗ Failed: {} skills", summary.failed);
    }
    println!("? Not mapped: {} skills", summary.unmapped.len());

    if !summary.unmapped.is_empty() {
        println!("\nNot mapped skills (manual review needed):");
        for id in &summary.unmapped {
            println!("  - {id}");
        }
    }
}
