//! Per-pixel palette substitution

use std::collections::HashSet;

use image::{Rgba, RgbaImage};
use log::debug;

use crate::recolor::palette::Palette;

/// Replace every occurrence of the palette's source colors
///
/// Matching compares the RGB channels exactly; the pixel's alpha channel is
/// carried over unchanged so anti-aliased edges and shadows keep their
/// translucency.
///
/// # Arguments
/// * `image` - The buffer to recolor
/// * `palette` - Source colors and their replacement
///
/// # Returns
/// A freshly allocated recolored buffer
pub fn apply_palette_swap(image: &RgbaImage, palette: &Palette) -> RgbaImage {
    let sources: HashSet<(u8, u8, u8)> = palette
        .sources
        .iter()
        .map(|c| (c.r, c.g, c.b))
        .collect();

    debug!(
        "Swapping {} source color(s) for {} over {}x{} buffer",
        sources.len(),
        palette.replacement,
        image.width(),
        image.height()
    );

    let replacement = palette.replacement;
    let mut output = image.clone();

    for pixel in output.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        if sources.contains(&(r, g, b)) {
            *pixel = Rgba([replacement.r, replacement.g, replacement.b, a]);
        }
    }

    output
}
