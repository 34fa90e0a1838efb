//! Relative path computation for symlink targets.

use std::path::{Component, Path, PathBuf};

/// Compute a path that reaches `target` from inside `base`.
///
/// Shared leading components are stripped and every remaining `base`
/// component becomes a `..`. Falls back to `target` as given when the two
/// paths share no root. Both paths should be absolute and lexically normal;
/// no filesystem access happens here.
pub fn relative_from(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let shared = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| *a == *b)
        .count();

    if shared == 0 {
        return target.to_path_buf();
    }

    let mut relative = PathBuf::new();
    for _ in shared..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[shared..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }

    relative
}
