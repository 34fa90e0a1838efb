//! Symlink operations on a single tool directory.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::relpath::relative_from;

/// Name of the entry managed inside each tool directory.
pub const SKILLS_LINK: &str = "skills";

/// Why a link operation refused or failed.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Link setup never replaces a real directory.
    #[error("{0} is a directory, not a symlink")]
    IsRealDirectory(PathBuf),
    /// The entry is neither a directory nor a symlink.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    /// The skills root is missing; deleting a directory that points nowhere
    /// would lose the only copy.
    #[error("skills root {0} does not exist")]
    MissingSkillsRoot(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What a link/adopt operation did to one tool directory.
#[derive(Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Fresh symlink created, pointing at `target`.
    Created { target: PathBuf },
    /// An old symlink was removed and recreated.
    Refreshed { target: PathBuf },
    /// Entry was already a symlink; left untouched.
    AlreadyLinked { target: PathBuf },
    /// A real directory was replaced by a symlink.
    Adopted { target: PathBuf },
    /// The tool directory has no skills entry at all.
    NoEntry,
}

/// Observed state of a tool directory's skills entry.
#[derive(Debug, PartialEq, Eq)]
pub enum LinkState {
    /// Symlink present, with its target as written.
    Linked(PathBuf),
    /// Real directory where a symlink should be.
    RealDirectory,
    /// Entry exists but is neither a symlink nor a directory.
    Other,
    /// No entry.
    Missing,
}

/// Create or refresh the skills symlink inside `tool_dir`.
///
/// An existing symlink is replaced; a real directory is refused. The written
/// target is relative to `tool_dir` so the tree stays relocatable.
pub fn ensure_link(tool_dir: &Path, skills_root: &Path) -> Result<LinkOutcome, LinkError> {
    let link = tool_dir.join(SKILLS_LINK);
    let mut refreshed = false;

    if link.is_symlink() {
        fs::remove_file(&link)?;
        refreshed = true;
    } else if link.is_dir() {
        return Err(LinkError::IsRealDirectory(link));
    }

    let target = relative_from(skills_root, tool_dir);
    symlink(&target, &link)?;

    if refreshed {
        Ok(LinkOutcome::Refreshed { target })
    } else {
        Ok(LinkOutcome::Created { target })
    }
}

/// Replace a real skills directory inside `tool_dir` with a symlink.
///
/// Refuses to delete anything while the skills root is missing.
pub fn adopt_dir(tool_dir: &Path, skills_root: &Path) -> Result<LinkOutcome, LinkError> {
    let link = tool_dir.join(SKILLS_LINK);

    if link.is_symlink() {
        let target = fs::read_link(&link)?;
        return Ok(LinkOutcome::AlreadyLinked { target });
    }
    if !link.exists() {
        return Ok(LinkOutcome::NoEntry);
    }
    if !link.is_dir() {
        return Err(LinkError::NotADirectory(link));
    }
    if !skills_root.is_dir() {
        return Err(LinkError::MissingSkillsRoot(skills_root.to_path_buf()));
    }

    fs::remove_dir_all(&link)?;
    let target = relative_from(skills_root, tool_dir);
    symlink(&target, &link)?;

    Ok(LinkOutcome::Adopted { target })
}

/// Inspect the skills entry of one tool directory without modifying it.
pub fn inspect(tool_dir: &Path) -> LinkState {
    let link = tool_dir.join(SKILLS_LINK);

    if link.is_symlink() {
        match fs::read_link(&link) {
            Ok(target) => LinkState::Linked(target),
            Err(_) => LinkState::Other,
        }
    } else if link.is_dir() {
        LinkState::RealDirectory
    } else if link.exists() {
        LinkState::Other
    } else {
        LinkState::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        skills_root: PathBuf,
        tool_dir: PathBuf,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let skills_root = temp.path().join("skills");
        let tool_dir = temp.path().join(".claude");
        fs::create_dir_all(&skills_root).unwrap();
        fs::create_dir_all(&tool_dir).unwrap();
        Fixture {
            _temp: temp,
            skills_root,
            tool_dir,
        }
    }

    #[test]
    fn test_ensure_link_creates_relative_symlink() {
        let f = fixture();
        let outcome = ensure_link(&f.tool_dir, &f.skills_root).unwrap();

        assert_eq!(
            outcome,
            LinkOutcome::Created {
                target: PathBuf::from("../skills")
            }
        );
        // The link resolves to the actual skills root.
        assert_eq!(
            f.tool_dir.join(SKILLS_LINK).canonicalize().unwrap(),
            f.skills_root.canonicalize().unwrap()
        );
    }

    #[test]
    fn test_ensure_link_is_idempotent() {
        let f = fixture();
        ensure_link(&f.tool_dir, &f.skills_root).unwrap();
        let second = ensure_link(&f.tool_dir, &f.skills_root).unwrap();

        assert_eq!(
            second,
            LinkOutcome::Refreshed {
                target: PathBuf::from("../skills")
            }
        );
        assert_eq!(
            inspect(&f.tool_dir),
            LinkState::Linked(PathBuf::from("../skills"))
        );
    }

    #[test]
    fn test_ensure_link_refuses_real_directory() {
        let f = fixture();
        fs::create_dir_all(f.tool_dir.join(SKILLS_LINK)).unwrap();

        let err = ensure_link(&f.tool_dir, &f.skills_root).unwrap_err();
        assert!(matches!(err, LinkError::IsRealDirectory(_)));
        // The directory is untouched.
        assert!(f.tool_dir.join(SKILLS_LINK).is_dir());
    }

    #[test]
    fn test_adopt_replaces_directory() {
        let f = fixture();
        let old = f.tool_dir.join(SKILLS_LINK);
        fs::create_dir_all(&old).unwrap();
        fs::write(old.join("stale.md"), "old copy").unwrap();

        let outcome = adopt_dir(&f.tool_dir, &f.skills_root).unwrap();

        assert_eq!(
            outcome,
            LinkOutcome::Adopted {
                target: PathBuf::from("../skills")
            }
        );
        assert!(old.is_symlink());
    }

    #[test]
    fn test_adopt_leaves_existing_symlink() {
        let f = fixture();
        ensure_link(&f.tool_dir, &f.skills_root).unwrap();

        let outcome = adopt_dir(&f.tool_dir, &f.skills_root).unwrap();
        assert_eq!(
            outcome,
            LinkOutcome::AlreadyLinked {
                target: PathBuf::from("../skills")
            }
        );
    }

    #[test]
    fn test_adopt_without_entry() {
        let f = fixture();
        assert_eq!(adopt_dir(&f.tool_dir, &f.skills_root).unwrap(), LinkOutcome::NoEntry);
    }

    #[test]
    fn test_adopt_refuses_when_skills_root_missing() {
        let f = fixture();
        let dir = f.tool_dir.join(SKILLS_LINK);
        fs::create_dir_all(&dir).unwrap();
        fs::remove_dir_all(&f.skills_root).unwrap();

        let err = adopt_dir(&f.tool_dir, &f.skills_root).unwrap_err();
        assert!(matches!(err, LinkError::MissingSkillsRoot(_)));
        // Nothing was deleted.
        assert!(dir.is_dir());
    }

    #[test]
    fn test_inspect_states() {
        let f = fixture();
        assert_eq!(inspect(&f.tool_dir), LinkState::Missing);

        fs::write(f.tool_dir.join(SKILLS_LINK), "a file").unwrap();
        assert_eq!(inspect(&f.tool_dir), LinkState::Other);

        fs::remove_file(f.tool_dir.join(SKILLS_LINK)).unwrap();
        ensure_link(&f.tool_dir, &f.skills_root).unwrap();
        assert_eq!(
            inspect(&f.tool_dir),
            LinkState::Linked(PathBuf::from("../skills"))
        );
    }
}
