//! Image loading and saving policy
//!
//! Every input is forced to RGBA on load so downstream transforms see a
//! single pixel format, and outputs are always PNG so transparency and
//! exact pixel values survive the round trip.

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::debug;

use crate::sheet::errors::ForgeResult;

/// Load a raster image as an RGBA buffer
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded buffer in RGBA format
pub fn load_rgba(path: &Path) -> ForgeResult<RgbaImage> {
    debug!("Loading {}", path.display());
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Save a buffer as a PNG file, creating parent directories as needed
///
/// # Arguments
/// * `image` - The buffer to save
/// * `path` - Destination path
pub fn save_png(image: &RgbaImage, path: &Path) -> ForgeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, ImageFormat::Png)?;
    debug!("Saved {}", path.display());
    Ok(())
}
