//! Triage report assembly and output.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::SkillRecord;

use super::classify::Verdict;

/// Description preview length in the report.
const DESCRIPTION_PREVIEW: usize = 100;

/// A kept skill, filed under its category.
#[derive(Debug, Clone, Serialize)]
pub struct KeptSkill {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A skill left for manual review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSkill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}

/// A skill matched by an exclusion keyword.
#[derive(Debug, Clone, Serialize)]
pub struct RemovedSkill {
    pub id: String,
    pub name: String,
    pub reason: String,
}

/// Full triage report, serialized as JSON.
///
/// Categories serialize in sorted order; records inside each bucket keep
/// index order.
#[derive(Debug, Serialize)]
pub struct TriageReport {
    pub generated_at: DateTime<Utc>,
    pub keep: BTreeMap<String, Vec<KeptSkill>>,
    pub review: Vec<ReviewSkill>,
    pub remove: Vec<RemovedSkill>,
}

impl TriageReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            keep: BTreeMap::new(),
            review: Vec::new(),
            remove: Vec::new(),
        }
    }

    /// File one record under its verdict.
    pub fn add(&mut self, record: &SkillRecord, verdict: &Verdict) {
        match verdict {
            Verdict::Keep { category } => {
                self.keep.entry(category.to_string()).or_default().push(KeptSkill {
                    id: record.id.clone(),
                    name: record.display_name().to_string(),
                    description: preview(&record.description),
                });
            }
            Verdict::Review => self.review.push(ReviewSkill {
                id: record.id.clone(),
                name: record.display_name().to_string(),
                category: record.category.clone(),
                description: preview(&record.description),
            }),
            Verdict::Remove { keyword } => self.remove.push(RemovedSkill {
                id: record.id.clone(),
                name: record.display_name().to_string(),
                reason: format!("Matched exclusion keyword '{keyword}'"),
            }),
        }
    }

    /// Number of kept skills across all categories.
    pub fn kept(&self) -> usize {
        self.keep.values().map(Vec::len).sum()
    }

    /// Total number of triaged records.
    pub fn total(&self) -> usize {
        self.kept() + self.review.len() + self.remove.len()
    }

    /// Write the report as pretty-printed JSON, creating the parent
    /// directory if needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize triage report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write triage report: {}", path.display()))?;

        Ok(())
    }

    /// Print the console summary.
    pub fn print_summary(&self, path: &Path) {
        println!("\n=== SKILLS ANALYSIS SUMMARY ===\n");

        println!("✓ KEEP ({} skills):", self.kept());
        for (category, items) in &self.keep {
            println!("  - {}: {} skills", category, items.len());
        }

        println!("\n? REVIEW ({} skills)", self.review.len());
        println!("✗ REMOVE ({} skills)", self.remove.len());

        println!("\nTotal: {} skills", self.total());
        println!("\nAnalysis saved to: {}", path.display());
    }
}

impl Default for TriageReport {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_PREVIEW {
        let head: String = description.chars().take(DESCRIPTION_PREVIEW).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}
