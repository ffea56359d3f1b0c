//! Path normalization without filesystem access.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components without filesystem access.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir => {}
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// Check if `path` is strictly below `root` after normalization.
pub fn is_below(path: &Path, root: &Path) -> bool {
    let normalized = normalize(path);
    let root_normalized = normalize(root);
    normalized != root_normalized && normalized.starts_with(&root_normalized)
}
