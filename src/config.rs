//! Run configuration.
//!
//! Paths come from an optional `.skills-config/curator.yaml` under the
//! project root, falling back to conventional defaults. Every path is
//! resolved to an absolute path at load time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;

/// Config file location, relative to the project root.
pub const CONFIG_FILE: &str = ".skills-config/curator.yaml";

/// On-disk configuration; every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    /// Skill index JSON file.
    index: Option<PathBuf>,
    /// Triage report destination.
    report: Option<PathBuf>,
    /// Flat source tree that migration copies from.
    source: Option<PathBuf>,
    /// Canonical categorized skills root.
    skills: Option<PathBuf>,
    /// Tool directories that should carry a skills symlink.
    tool_dirs: Option<Vec<PathBuf>>,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root all relative paths were resolved against.
    pub root: PathBuf,
    /// Skill index JSON file.
    pub index_path: PathBuf,
    /// Triage report destination.
    pub report_path: PathBuf,
    /// Flat source tree that migration copies from.
    pub source_dir: PathBuf,
    /// Canonical categorized skills root.
    pub skills_dir: PathBuf,
    /// Tool directories that should carry a skills symlink.
    pub tool_dirs: Vec<PathBuf>,
}

impl Config {
    /// Load configuration for the given project root.
    pub fn load(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;

        let config_path = root.join(CONFIG_FILE);
        let raw = if config_path.is_file() {
            let text = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            RawConfig::default()
        };

        Ok(Self::resolve(root, raw))
    }

    fn resolve(root: PathBuf, raw: RawConfig) -> Self {
        let index_path = absolutize(&root, raw.index.unwrap_or_else(|| ".agent/skills_index.json".into()));
        let report_path = absolutize(
            &root,
            raw.report.unwrap_or_else(|| ".skills-config/skills_analysis.json".into()),
        );
        let source_dir = absolutize(&root, raw.source.unwrap_or_else(|| ".agent/skills".into()));
        let skills_dir = absolutize(&root, raw.skills.unwrap_or_else(|| "skills".into()));
        let tool_dirs = raw
            .tool_dirs
            .unwrap_or_else(|| vec![".claude".into(), ".agent".into(), ".cursor".into(), ".gemini".into()])
            .into_iter()
            .map(|dir| absolutize(&root, dir))
            .collect();

        Self {
            root,
            index_path,
            report_path,
            source_dir,
            skills_dir,
            tool_dirs,
        }
    }
}

/// Resolve a configured path against the project root, expanding a leading `~`.
fn absolutize(root: &Path, path: PathBuf) -> PathBuf {
    let path = expand_home(path);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(base) = BaseDirs::new() {
            return base.home_dir().join(stripped);
        }
    }
    path
}
