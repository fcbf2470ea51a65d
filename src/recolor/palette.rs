//! Palette model for recolor operations
//!
//! A palette is a set of source colors plus the single replacement color
//! applied to all of them. Matching is exact on the RGB channels; alpha is
//! never part of the match and is preserved through the swap.

use std::fmt;

use crate::sheet::errors::{ForgeError, ForgeResult};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    /// Parse a color from an "r,g,b" string
    ///
    /// # Arguments
    /// * `text` - Comma-separated channel values, e.g. "128,128,128"
    ///
    /// # Returns
    /// The parsed color, or an error describing the malformed component
    pub fn parse(text: &str) -> ForgeResult<Self> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 3 {
            return Err(ForgeError::GenericError(format!(
                "Invalid color '{}'. Expected 'r,g,b'",
                text
            )));
        }

        let mut channels = [0u8; 3];
        for (i, part) in parts.iter().enumerate() {
            channels[i] = part.trim().parse::<u8>().map_err(|_| {
                ForgeError::GenericError(format!(
                    "Invalid channel value '{}' in color '{}'. Expected a number between 0-255",
                    part, text
                ))
            })?;
        }

        Ok(RgbColor::new(channels[0], channels[1], channels[2]))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// A recolor palette: which colors to replace, and with what
#[derive(Debug, Clone)]
pub struct Palette {
    /// Colors to be replaced
    pub sources: Vec<RgbColor>,
    /// The color every source is replaced with
    pub replacement: RgbColor,
}

impl Palette {
    /// Create a new palette
    pub fn new(sources: Vec<RgbColor>, replacement: RgbColor) -> Self {
        Palette {
            sources,
            replacement,
        }
    }

    /// Build a palette from "r,g,b" strings
    ///
    /// # Arguments
    /// * `sources` - Source color strings
    /// * `replacement` - Replacement color string
    ///
    /// # Returns
    /// The parsed palette, or an error for the first malformed color
    pub fn from_strings(sources: &[String], replacement: &str) -> ForgeResult<Self> {
        if sources.is_empty() {
            return Err(ForgeError::GenericError(
                "Palette needs at least one source color".to_string(),
            ));
        }

        let parsed: ForgeResult<Vec<RgbColor>> =
            sources.iter().map(|s| RgbColor::parse(s)).collect();

        Ok(Palette::new(parsed?, RgbColor::parse(replacement)?))
    }
}
