/*!
 * Directory and file scanning functionality
 */

use std::path::{Path, PathBuf};

use glob_match::glob_match;
use walkdir::WalkDir;

use crate::error::{Result, SfPackError};

/// Patterns excluded while collecting members for the manifest
pub const MANIFEST_EXCLUDE: &[&str] = &["*.txt", "*.log", "*.xml"];

/// Patterns excluded by the single-directory listing. Intentionally empty:
/// the listing mode applies no filter, unlike the manifest scan.
pub const LISTING_EXCLUDE: &[&str] = &[];

/// List the immediate child directories of `root`.
///
/// Hidden entries are included. The order is the platform's directory
/// listing order and is not normalized.
pub fn list_subfolders(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(SfPackError::NotFound(format!(
            "Directory not found: {}",
            root.display()
        )));
    }

    let mut folders = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            SfPackError::Scan(format!("Failed to list {}: {}", root.display(), e))
        })?;
        if entry.file_type().is_dir() {
            folders.push(entry.into_path());
        }
    }

    Ok(folders)
}

/// List the files inside `dir` as member names.
///
/// Every name matching one of the `exclude` globs is skipped; the rest are
/// returned with their extension stripped, in directory-listing order.
/// Two files differing only by extension yield the same name twice.
/// `recursive` controls whether the walk descends into subdirectories;
/// hidden entries are included either way.
pub fn list_files(dir: &Path, exclude: &[&str], recursive: bool) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(SfPackError::NotFound(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let mut walker = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut members = Vec::new();
    for entry in walker {
        let entry = entry
            .map_err(|e| SfPackError::Scan(format!("Failed to list {}: {}", dir.display(), e)))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if is_excluded(&file_name, exclude) {
            continue;
        }

        members.push(
            entry
                .path()
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
    }

    Ok(members)
}

/// Check a file name against a set of glob patterns
fn is_excluded(file_name: &str, exclude: &[&str]) -> bool {
    exclude.iter().any(|pattern| glob_match(pattern, file_name))
}
