//! Path normalization and directory helpers.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. The filesystem is not consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Create `dir` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreateFailed {
        path: dir.to_path_buf(),
        source: e,
    })
}
