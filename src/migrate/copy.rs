//! Recursive directory copy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Copy `src` into `dest`, recursively.
///
/// `dest` itself is created. Symlinks inside the tree are followed and their
/// content copied, so the copy stands alone.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("Walked outside of {}", src.display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }

    Ok(())
}
