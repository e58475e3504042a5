//! Input collection: expand file and directory arguments into an ordered
//! list of image files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FuseError, Result};

use super::probe::{is_supported, SUPPORTED_EXTENSIONS};

/// Expand input arguments into an ordered list of image files.
///
/// Files are taken in the order given; a directory is walked recursively
/// and its supported images are inserted in path order. Explicitly named
/// files with unsupported extensions are an error, while unsupported files
/// inside a directory are skipped silently.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(scan_directory(input));
        } else if is_supported(input) {
            files.push(input.clone());
        } else {
            return Err(FuseError::Validation {
                message: format!("Unsupported image file: {}", input.display()),
                help: Some(format!(
                    "Supported extensions: {}",
                    SUPPORTED_EXTENSIONS.join(", ")
                )),
            });
        }
    }

    Ok(files)
}

/// Walk a directory and return its supported images in path order.
fn scan_directory(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| is_supported(p))
        .collect()
}
