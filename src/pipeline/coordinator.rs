//! Input collection and output placement.

use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{Error, Result};
use crate::output::Reporter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files gathered from all top-level inputs.
#[derive(Debug, Default)]
pub struct CollectedInputs {
    /// Candidate files, grouped per input in input order.
    pub files: Vec<PathBuf>,
    /// Inputs that exist.
    pub existing: Vec<PathBuf>,
    /// Inputs that do not exist.
    pub missing: Vec<PathBuf>,
}

/// List candidate files under `root`.
///
/// A file root is returned as-is whatever its extension. A directory root
/// yields image files matching the extension allowlist, descending into
/// sub-directories only when `recursive` is set. The result is sorted.
pub fn collect_candidate_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(Error::InputNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_image_files(root, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

/// Collect candidate files from several inputs.
///
/// Missing or unscannable inputs are reported and skipped; they never abort
/// the other inputs.
pub fn collect_input_files(
    inputs: &[PathBuf],
    recursive: bool,
    reporter: &dyn Reporter,
) -> CollectedInputs {
    let mut collected = CollectedInputs::default();

    for input in inputs {
        match collect_candidate_files(input, recursive) {
            Ok(files) => {
                collected.files.extend(files);
                collected.existing.push(input.clone());
            }
            Err(Error::InputNotFound { path }) => {
                reporter.input_missing(&path);
                collected.missing.push(path);
            }
            Err(e) => {
                reporter.input_failed(input, &e);
                collected.existing.push(input.clone());
            }
        }
    }

    collected
}

/// Default output file: inside `input` when it is a directory, next to it
/// otherwise.
pub fn default_output_path(input: &Path, filename: &str) -> PathBuf {
    if input.is_dir() {
        return input.join(filename);
    }

    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        .join(filename)
}

fn collect_image_files(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            if recursive {
                collect_image_files(&path, recursive, files)?;
            }
        } else if file_type.is_symlink() && path.is_dir() {
            // Directory links are not followed; they can loop back on an ancestor
            debug!("Not following directory link {}", path.display());
        } else if is_image_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

/// Check if a file has an allowlisted image extension.
fn is_image_file(path: &Path) -> bool {
    use std::ffi::OsStr;

    path.extension().is_some_and(|ext| {
        // Compare as OsStr to handle non-UTF-8 filenames
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(OsStr::new(allowed)))
    })
}
