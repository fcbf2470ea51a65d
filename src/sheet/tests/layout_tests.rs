//! Tests for the sheet layout convention

use crate::sheet::errors::ForgeError;
use crate::sheet::layout::{SheetLayout, DEFAULT_MIN_SHEET_HEIGHT};

#[test]
fn test_default_layout_conforms() {
    let layout = SheetLayout::default();

    assert!(layout.conforms(64, 256));
    assert!(layout.conforms(576, 1344));
}

#[test]
fn test_misaligned_height_does_not_conform() {
    let layout = SheetLayout::default();

    assert!(!layout.conforms(64, 255));
    assert!(!layout.conforms(64, 258));
}

#[test]
fn test_short_buffer_does_not_conform() {
    let layout = SheetLayout::default();

    // Divisible by 4 but below the minimum height heuristic
    assert!(!layout.conforms(64, 128));
    assert!(!layout.conforms(64, 64));
}

#[test]
fn test_zero_width_does_not_conform() {
    let layout = SheetLayout::default();
    assert!(!layout.conforms(0, 256));
}

#[test]
fn test_custom_min_height() {
    let layout = SheetLayout::with_min_height(64);

    assert!(layout.conforms(64, 128));
    assert!(!layout.conforms(64, 32));
    assert_eq!(
        SheetLayout::default().min_sheet_height,
        DEFAULT_MIN_SHEET_HEIGHT
    );
}

#[test]
fn test_row_height() {
    let layout = SheetLayout::default();

    assert_eq!(layout.row_height(64, 256).unwrap(), 64);
    assert_eq!(layout.row_height(64, 4).unwrap(), 1);

    let result = layout.row_height(64, 250);
    assert!(matches!(
        result,
        Err(ForgeError::InvalidSheetDimensions(64, 250))
    ));

    let result = layout.row_height(64, 0);
    assert!(matches!(result, Err(ForgeError::InvalidSheetDimensions(_, _))));
}
