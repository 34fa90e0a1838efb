//! Data models for the skill catalog.

use serde::{Deserialize, Serialize};

/// A skill record from the library index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Unique identifier; also the directory name on disk.
    pub id: String,
    /// Display name of the skill.
    #[serde(default)]
    pub name: Option<String>,
    /// Category assigned by whatever produced the index.
    #[serde(default = "default_category")]
    pub category: String,
    /// Short free-text description of the skill.
    #[serde(default)]
    pub description: String,
}

fn default_category() -> String {
    "uncategorized".to_string()
}

impl SkillRecord {
    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
