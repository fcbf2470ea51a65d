//! Sheet definition entry model
//!
//! Definition files are JSON arrays consumed by the character generator
//! front end; each element registers one sprite variant under a layer
//! category.

use serde::{Deserialize, Serialize};

/// One registered sprite variant in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetEntry {
    /// Human-readable display name shown in the generator UI
    pub name: String,
    /// Path of the sprite sheet, relative to the generator root
    pub file: String,
    /// Layer category the variant belongs to
    pub layer: String,
    /// Body variant the sheet applies to ("male", "female" or "universal")
    pub gender: String,
}

/// Convert an item folder name to a display name
///
/// Underscores become spaces and each word is capitalized, so
/// "chainmail_green" becomes "Chainmail Green".
///
/// # Arguments
/// * `folder_name` - The item folder name
pub fn display_name(folder_name: &str) -> String {
    folder_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
