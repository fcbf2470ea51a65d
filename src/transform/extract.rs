//! Row extraction from stacked sprite sheets
//!
//! Extraction is a pure crop: no resampling, no filtering. The output is
//! pixel-for-pixel identical to the source band.

use image::{imageops, RgbaImage};
use log::debug;

use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::sheet::layout::SHEET_ROWS;
use crate::sheet::validation;
use crate::transform::region::Region;

/// Copy a rectangular region out of a buffer
///
/// # Arguments
/// * `buffer` - The source buffer
/// * `region` - The area to copy, in pixel coordinates
///
/// # Returns
/// A new buffer of the region's size, or an error when the region reaches
/// outside the source
pub fn extract_region(buffer: &RgbaImage, region: &Region) -> ForgeResult<RgbaImage> {
    validation::validate_buffer(buffer)?;

    if !region.fits_within(buffer.width(), buffer.height()) {
        return Err(ForgeError::GenericError(format!(
            "Region {}x{} at ({},{}) exceeds buffer bounds {}x{}",
            region.width,
            region.height,
            region.x,
            region.y,
            buffer.width(),
            buffer.height()
        )));
    }

    Ok(imageops::crop_imm(buffer, region.x, region.y, region.width, region.height).to_image())
}

/// Extract a single direction row from a 4-row sprite sheet
///
/// The sheet height must divide evenly into 4 rows; a remainder is a
/// validation failure rather than an implicit floor, so misaligned sheets
/// are caught instead of silently producing shifted rows.
///
/// # Arguments
/// * `sheet` - The 4-row sprite sheet
/// * `row_index` - Row to extract (0=S, 1=W, 2=N, 3=E)
///
/// # Returns
/// A buffer of size (sheet width, sheet height / 4)
pub fn extract_row(sheet: &RgbaImage, row_index: u32) -> ForgeResult<RgbaImage> {
    validation::validate_buffer(sheet)?;
    validation::validate_row_index(row_index)?;

    let height = sheet.height();
    if height % SHEET_ROWS != 0 {
        return Err(ForgeError::InvalidSheetDimensions(sheet.width(), height));
    }
    let row_height = height / SHEET_ROWS;

    debug!(
        "Extracting row {} ({}x{} band at y={})",
        row_index,
        sheet.width(),
        row_height,
        row_index * row_height
    );

    let band = Region::row_band(sheet.width(), row_height, row_index);
    extract_region(sheet, &band)
}
