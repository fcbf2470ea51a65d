//! Built-in palette registry
//!
//! Named palettes for common LPC material swaps, embedded at compile time
//! from palettes.toml. User-supplied palette files use the same schema as a
//! single registry entry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::recolor::palette::Palette;
use crate::sheet::errors::{ForgeError, ForgeResult};

lazy_static! {
    // Parse the embedded registry at startup
    static ref BUILT_IN_PALETTES: HashMap<String, Palette> = {
        let content = include_str!("../../palettes.toml");
        match parse_registry(content) {
            Ok(palettes) => palettes,
            Err(e) => {
                eprintln!("Warning: Failed to parse built-in palette registry: {}", e);
                HashMap::new()
            }
        }
    };
}

/// Serialized form of one palette definition
#[derive(Debug, Deserialize)]
struct PaletteDef {
    name: String,
    sources: Vec<String>,
    replacement: String,
}

/// Serialized form of the registry file
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(rename = "palette")]
    palettes: Vec<PaletteDef>,
}

/// Serialized form of a standalone palette file
#[derive(Debug, Deserialize)]
struct PaletteFile {
    sources: Vec<String>,
    replacement: String,
}

fn parse_registry(content: &str) -> ForgeResult<HashMap<String, Palette>> {
    let file: RegistryFile = toml::from_str(content)
        .map_err(|e| ForgeError::GenericError(format!("Invalid palette registry: {}", e)))?;

    let mut palettes = HashMap::new();
    for def in file.palettes {
        let palette = Palette::from_strings(&def.sources, &def.replacement)?;
        palettes.insert(def.name, palette);
    }
    Ok(palettes)
}

/// Look up a built-in palette by name
///
/// # Arguments
/// * `name` - Registry name, e.g. "steel-to-gold"
///
/// # Returns
/// A copy of the palette, or None when the name is not registered
pub fn named_palette(name: &str) -> Option<Palette> {
    BUILT_IN_PALETTES.get(name).cloned()
}

/// Names of all built-in palettes, sorted
pub fn palette_names() -> Vec<String> {
    let mut names: Vec<String> = BUILT_IN_PALETTES.keys().cloned().collect();
    names.sort();
    names
}

/// Load a palette from a TOML file
///
/// The file carries `sources` (a list of "r,g,b" strings) and a single
/// `replacement` color.
///
/// # Arguments
/// * `path` - Path to the palette file
///
/// # Returns
/// The parsed palette or an error
pub fn load_palette_file(path: &Path) -> ForgeResult<Palette> {
    let content = fs::read_to_string(path)?;
    let file: PaletteFile = toml::from_str(&content).map_err(|e| {
        ForgeError::GenericError(format!("Invalid palette file {}: {}", path.display(), e))
    })?;
    Palette::from_strings(&file.sources, &file.replacement)
}
