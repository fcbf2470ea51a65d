//! Missing-entry injection into JSON definition files
//!
//! Diffs the sprite inventory against the registered definitions and
//! appends whatever is missing. Every file is backed up with a timestamped
//! copy before it is rewritten, and a dry-run mode reports the diff without
//! touching anything.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};
use serde_json::Value;

use crate::definitions::entry::{display_name, SheetEntry};
use crate::definitions::scanner::{scan_definitions, scan_spritesheets};
use crate::sheet::errors::{ForgeError, ForgeResult};

/// Default location for pre-modification backups
pub const DEFAULT_BACKUP_DIR: &str = "backups/json_definitions";

/// Summary of one injection run
#[derive(Debug, Default)]
pub struct InjectionReport {
    /// Items found in the spritesheet directory
    pub items_found: usize,
    /// Entries that were missing from the definitions
    pub entries_missing: usize,
    /// Entries actually written (zero on a dry run)
    pub entries_injected: usize,
    /// Definition files created or rewritten
    pub files_updated: usize,
}

/// Create a timestamped backup of a definition file
///
/// # Arguments
/// * `file_path` - The file to back up
/// * `backup_dir` - Directory the backup is placed in (created on demand)
///
/// # Returns
/// Path of the backup copy
pub fn create_backup(file_path: &Path, backup_dir: &Path) -> ForgeResult<PathBuf> {
    fs::create_dir_all(backup_dir)?;

    let stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .ok_or_else(|| {
            ForgeError::GenericError(format!("Cannot back up '{}'", file_path.display()))
        })?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = backup_dir.join(format!("{}_{}.json", stem, timestamp));

    fs::copy(file_path, &backup_path)?;
    info!("Backed up {} to {}", file_path.display(), backup_path.display());

    Ok(backup_path)
}

/// Compute the entries present on disk but absent from the definitions
fn find_missing_entries(
    spritesheet_dir: &Path,
    definitions_dir: &Path,
) -> ForgeResult<(usize, Vec<(String, Vec<SheetEntry>)>)> {
    let inventory = scan_spritesheets(spritesheet_dir)?;
    let registered = scan_definitions(definitions_dir)?;

    let mut missing: Vec<(String, Vec<SheetEntry>)> = Vec::new();

    for (key, genders) in &inventory {
        let Some((category, item_name)) = key.split_once('/') else {
            continue;
        };

        let known = registered.get(category);
        for (gender, sheet_path) in genders {
            let already_registered = known.map(|k| k.contains(sheet_path)).unwrap_or(false);
            if already_registered {
                continue;
            }

            let entry = SheetEntry {
                name: display_name(item_name),
                file: sheet_path.clone(),
                layer: category.to_string(),
                gender: gender.clone(),
            };

            match missing.iter_mut().find(|(c, _)| c == category) {
                Some((_, entries)) => entries.push(entry),
                None => missing.push((category.to_string(), vec![entry])),
            }
        }
    }

    Ok((inventory.len(), missing))
}

/// Inject missing sprite entries into the definition files
///
/// # Arguments
/// * `spritesheet_dir` - Root of the spritesheet tree
/// * `definitions_dir` - Directory of per-category JSON files
/// * `backup_dir` - Where pre-modification backups are placed
/// * `dry_run` - Report the diff without writing anything
///
/// # Returns
/// A report of what was found and what was written
pub fn inject_missing_entries(
    spritesheet_dir: &Path,
    definitions_dir: &Path,
    backup_dir: &Path,
    dry_run: bool,
) -> ForgeResult<InjectionReport> {
    info!("Scanning sprite sheets and definitions");

    let (items_found, missing) = find_missing_entries(spritesheet_dir, definitions_dir)?;
    let entries_missing: usize = missing.iter().map(|(_, entries)| entries.len()).sum();

    info!("Found {} item(s) in spritesheet directory", items_found);

    let mut report = InjectionReport {
        items_found,
        entries_missing,
        ..Default::default()
    };

    if missing.is_empty() {
        info!("All sprites are already registered");
        return Ok(report);
    }

    for (category, entries) in &missing {
        info!("{}: {} new entry/entries", category, entries.len());
        for entry in entries {
            info!("  - {} ({})", entry.name, entry.gender);
        }
    }

    if dry_run {
        info!("Dry run, no changes made");
        return Ok(report);
    }

    for (category, entries) in missing {
        let json_file = definitions_dir.join(format!("{}.json", category));

        let mut data: Vec<Value> = if json_file.exists() {
            create_backup(&json_file, backup_dir)?;
            let content = fs::read_to_string(&json_file)?;
            match serde_json::from_str(&content) {
                Ok(Value::Array(entries)) => entries,
                Ok(_) => {
                    warn!(
                        "Skipping {}: expected a JSON array at the top level",
                        json_file.display()
                    );
                    continue;
                }
                Err(e) => {
                    warn!("Skipping {} due to load error: {}", json_file.display(), e);
                    continue;
                }
            }
        } else {
            info!("Creating new definition file: {}", json_file.display());
            Vec::new()
        };

        for entry in entries {
            data.push(serde_json::to_value(&entry)?);
            report.entries_injected += 1;
        }

        let serialized = serde_json::to_string_pretty(&Value::Array(data))?;
        fs::write(&json_file, serialized)?;
        report.files_updated += 1;
        info!("Updated {}", json_file.display());
    }

    Ok(report)
}
