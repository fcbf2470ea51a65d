//! LPC sprite sheet layout convention
//!
//! An LPC character sheet stacks four equal-height rows of animation frames,
//! one per cardinal direction, ordered South, West, North, East from the top.

use crate::sheet::errors::{ForgeError, ForgeResult};

/// Number of direction rows in an LPC sheet
pub const SHEET_ROWS: u32 = 4;

/// Default minimum sheet height for the layout heuristic, in pixels
///
/// Full LPC sheets are at least 4 rows of 64px frames. Anything shorter is
/// assumed to be a single pre-cut row rather than a stacked sheet.
pub const DEFAULT_MIN_SHEET_HEIGHT: u32 = 256;

/// Layout parameters for sheet conformance checks
///
/// The row count is fixed by the LPC convention; the minimum height is a
/// heuristic and stays tunable because cut-down asset packs ship sheets
/// with smaller frames.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    /// Minimum total height for a buffer to be treated as a stacked sheet
    pub min_sheet_height: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout {
            min_sheet_height: DEFAULT_MIN_SHEET_HEIGHT,
        }
    }
}

impl SheetLayout {
    /// Create a layout with a custom minimum sheet height
    pub fn with_min_height(min_sheet_height: u32) -> Self {
        SheetLayout { min_sheet_height }
    }

    /// Whether a buffer of the given dimensions is a stacked 4-row sheet
    ///
    /// # Arguments
    /// * `width` - Buffer width in pixels
    /// * `height` - Buffer height in pixels
    ///
    /// # Returns
    /// True when the height divides evenly into 4 rows and meets the
    /// minimum height heuristic
    pub fn conforms(&self, width: u32, height: u32) -> bool {
        width > 0 && height % SHEET_ROWS == 0 && height >= self.min_sheet_height
    }

    /// Height of a single direction row
    ///
    /// # Arguments
    /// * `height` - Total sheet height in pixels
    ///
    /// # Returns
    /// The per-row height, or `InvalidSheetDimensions` when the height does
    /// not divide evenly
    pub fn row_height(&self, width: u32, height: u32) -> ForgeResult<u32> {
        if height == 0 || height % SHEET_ROWS != 0 {
            return Err(ForgeError::InvalidSheetDimensions(width, height));
        }
        Ok(height / SHEET_ROWS)
    }
}
