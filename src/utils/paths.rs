//! Path helpers for batch processing
//!
//! Batch runs walk a source tree of PNG sheets and write results to a
//! mirrored destination tree, preserving the relative layout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::sheet::errors::{ForgeError, ForgeResult};

/// Recursively collect all PNG files under a directory
///
/// Results are sorted for deterministic batch ordering.
///
/// # Arguments
/// * `dir` - Root directory to walk
///
/// # Returns
/// Paths of every .png file found, or an error when the root is missing
pub fn collect_png_files(dir: &Path) -> ForgeResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ForgeError::GenericError(format!(
            "Source directory '{}' not found",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    walk_pngs(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk_pngs(dir: &Path, files: &mut Vec<PathBuf>) -> ForgeResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_pngs(&path, files)?;
        } else if path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("png"))
            .unwrap_or(false)
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Map a source file to its place in a mirrored output tree
///
/// # Arguments
/// * `source_root` - Root of the source tree
/// * `source_file` - A file somewhere under the source root
/// * `output_root` - Root of the destination tree
///
/// # Returns
/// The output path with the same relative location, or an error when the
/// file is not under the source root
pub fn mirrored_output_path(
    source_root: &Path,
    source_file: &Path,
    output_root: &Path,
) -> ForgeResult<PathBuf> {
    let relative = source_file.strip_prefix(source_root).map_err(|_| {
        ForgeError::GenericError(format!(
            "File '{}' is not under source directory '{}'",
            source_file.display(),
            source_root.display()
        ))
    })?;
    Ok(output_root.join(relative))
}

/// Append a suffix to a file stem, keeping the extension
///
/// "hero.png" with suffix "_ne" becomes "hero_ne.png".
///
/// # Arguments
/// * `path` - The original path
/// * `suffix` - Text appended to the file stem
pub fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "png".to_string());
    path.with_file_name(format!("{}{}.{}", stem, suffix, extension))
}
