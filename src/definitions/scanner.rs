//! Directory scanners for sprite inventories and definition files
//!
//! The spritesheet tree follows the `category/item/gender.png` convention;
//! definition files are one JSON array per category. The scanners build the
//! two views the injector diffs against each other.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::sheet::errors::{ForgeError, ForgeResult};

/// Recognized body variant file stems
const GENDERS: [&str; 3] = ["male", "female", "universal"];

/// Inventory of available sprites: "category/item" -> gender -> sheet path
pub type SpriteInventory = BTreeMap<String, BTreeMap<String, String>>;

/// Registered sheet paths per category
pub type RegisteredSheets = BTreeMap<String, HashSet<String>>;

/// Scan the spritesheet directory into a structured inventory
///
/// Walks `category/item/*.png` and records every male/female/universal
/// sheet. Hidden and underscore-prefixed category folders are skipped.
/// Recorded paths are prefixed with the spritesheet directory name, which
/// is the form definition files reference them in.
///
/// # Arguments
/// * `spritesheet_dir` - Root of the spritesheet tree
///
/// # Returns
/// The inventory, or an error when the directory does not exist
pub fn scan_spritesheets(spritesheet_dir: &Path) -> ForgeResult<SpriteInventory> {
    if !spritesheet_dir.is_dir() {
        return Err(ForgeError::GenericError(format!(
            "Spritesheet directory '{}' not found",
            spritesheet_dir.display()
        )));
    }

    let dir_name = spritesheet_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "spritesheets".to_string());

    let mut inventory = SpriteInventory::new();

    for category_entry in fs::read_dir(spritesheet_dir)? {
        let category_path = category_entry?.path();
        if !category_path.is_dir() {
            continue;
        }

        let category = match category_path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };
        if category.starts_with('.') || category.starts_with('_') {
            continue;
        }

        for item_entry in fs::read_dir(&category_path)? {
            let item_path = item_entry?.path();
            if !item_path.is_dir() {
                continue;
            }

            let item_name = match item_path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let key = format!("{}/{}", category, item_name);

            for sprite_entry in fs::read_dir(&item_path)? {
                let sprite_path = sprite_entry?.path();
                let is_png = sprite_path
                    .extension()
                    .map(|e| e.eq_ignore_ascii_case("png"))
                    .unwrap_or(false);
                if !is_png {
                    continue;
                }

                let stem = match sprite_path.file_stem() {
                    Some(stem) => stem.to_string_lossy().to_lowercase(),
                    None => continue,
                };
                if !GENDERS.contains(&stem.as_str()) {
                    continue;
                }

                let file_name = sprite_path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let sheet_path = format!("{}/{}/{}/{}", dir_name, category, item_name, file_name);

                debug!("Found {} sheet for {}: {}", stem, key, sheet_path);
                inventory
                    .entry(key.clone())
                    .or_default()
                    .insert(stem, sheet_path);
            }
        }
    }

    Ok(inventory)
}

/// Scan existing JSON definitions for registered sheet paths
///
/// Entries are read leniently: anything that is an object carrying both
/// `name` and `file` counts as registered, everything else is ignored so a
/// hand-edited file does not block the scan.
///
/// # Arguments
/// * `definitions_dir` - Directory of per-category JSON files
///
/// # Returns
/// The registered sheet paths per category
pub fn scan_definitions(definitions_dir: &Path) -> ForgeResult<RegisteredSheets> {
    if !definitions_dir.is_dir() {
        return Err(ForgeError::GenericError(format!(
            "Definitions directory '{}' not found",
            definitions_dir.display()
        )));
    }

    let mut registered = RegisteredSheets::new();

    for entry in fs::read_dir(definitions_dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }

        let category = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };

        let content = fs::read_to_string(&path)?;
        let data: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!("Skipping unreadable definition file {}: {}", path.display(), e);
                continue;
            }
        };

        let files = registered.entry(category).or_default();
        if let Value::Array(entries) = data {
            for item in entries {
                if let Value::Object(map) = item {
                    if map.contains_key("name") {
                        if let Some(Value::String(file)) = map.get("file") {
                            files.insert(file.clone());
                        }
                    }
                }
            }
        }
    }

    Ok(registered)
}
