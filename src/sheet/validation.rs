//! Input validation for sprite buffers
//!
//! Validation failures here are fatal to the single call; dimension
//! convention mismatches are handled separately by the orchestrator's
//! fallback path and never reach these checks.

use image::RgbaImage;

use crate::sheet::errors::{ForgeError, ForgeResult};

/// Validate that a buffer is present and has non-zero dimensions
///
/// # Arguments
/// * `buffer` - The buffer to validate
///
/// # Returns
/// Ok if the buffer is usable, `InvalidInput` otherwise
pub fn validate_buffer(buffer: &RgbaImage) -> ForgeResult<()> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(ForgeError::InvalidInput(format!(
            "zero-size buffer ({}x{})",
            buffer.width(),
            buffer.height()
        )));
    }
    Ok(())
}

/// Validate a row index against the 4-row layout
///
/// # Arguments
/// * `row_index` - Requested row index
///
/// # Returns
/// Ok if the index addresses one of the four direction rows
pub fn validate_row_index(row_index: u32) -> ForgeResult<()> {
    if row_index >= crate::sheet::layout::SHEET_ROWS {
        return Err(ForgeError::GenericError(format!(
            "Row index {} out of range (expected 0-3)",
            row_index
        )));
    }
    Ok(())
}
