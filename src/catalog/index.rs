//! Skill index reader.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::models::SkillRecord;

/// Read the skill index, a JSON array of records, from disk.
///
/// Record order is preserved; downstream triage output depends on it.
pub fn load_index(path: &Path) -> Result<Vec<SkillRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read skill index: {}", path.display()))?;

    let records: Vec<SkillRecord> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse skill index: {}", path.display()))?;

    Ok(records)
}
