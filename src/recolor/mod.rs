//! Palette-substitution recoloring
//!
//! Generates color variants of sprite assets by exact lookup-and-replace
//! over the RGB channels, the way LPC asset packs derive material variants
//! from a base sheet.

mod palette;
mod registry;
mod swap;

#[cfg(test)]
mod tests;

pub use palette::{Palette, RgbColor};
pub use registry::{load_palette_file, named_palette, palette_names};
pub use swap::apply_palette_swap;
