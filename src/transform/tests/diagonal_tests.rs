//! Tests for diagonal view orchestration

use image::RgbaImage;

use crate::sheet::direction::Direction;
use crate::sheet::errors::ForgeError;
use crate::sheet::layout::SheetLayout;
use crate::transform::diagonal::{
    generate_all_diagonals, generate_all_directions, generate_diagonal,
    generate_diagonal_with_layout,
};
use crate::transform::extract::extract_row;
use crate::transform::shear::ShearParams;
use crate::transform::tests::test_utils::{make_solid_buffer, make_test_sheet, BLUE, RED};

#[test]
fn test_diagonal_sources_correct_row() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();

    // North row is solid blue, South row solid red; a center pixel of the
    // sheared output keeps the source row's color
    let ne = generate_diagonal(&sheet, Direction::NorthEast, &params).unwrap();
    assert_eq!(*ne.get_pixel(20, 10), BLUE);

    let nw = generate_diagonal(&sheet, Direction::NorthWest, &params).unwrap();
    assert_eq!(*nw.get_pixel(20, 10), BLUE);

    let se = generate_diagonal(&sheet, Direction::SouthEast, &params).unwrap();
    assert_eq!(*se.get_pixel(20, 10), RED);

    let sw = generate_diagonal(&sheet, Direction::SouthWest, &params).unwrap();
    assert_eq!(*sw.get_pixel(20, 10), RED);
}

#[test]
fn test_diagonal_output_is_row_sized() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();

    for direction in Direction::DIAGONALS {
        let output = generate_diagonal(&sheet, direction, &params).unwrap();
        assert_eq!(output.width(), 64);
        assert_eq!(output.height(), 64);
    }
}

#[test]
fn test_cardinal_direction_rejected() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();

    let result = generate_diagonal(&sheet, Direction::North, &params);
    assert!(matches!(result, Err(ForgeError::GenericError(_))));
}

#[test]
fn test_empty_buffer_rejected() {
    let sheet = RgbaImage::new(0, 0);
    let params = ShearParams::default();

    let result = generate_diagonal(&sheet, Direction::NorthEast, &params);
    assert!(matches!(result, Err(ForgeError::InvalidInput(_))));
}

#[test]
fn test_nonconforming_buffer_falls_back_to_whole_shear() {
    // 64x90 cannot be a 4-row sheet; the call must still succeed and
    // return a buffer of the input's size
    let buffer = make_solid_buffer(64, 90, BLUE);
    let params = ShearParams::default();

    let output = generate_diagonal(&buffer, Direction::NorthEast, &params).unwrap();
    assert_eq!(output.width(), 64);
    assert_eq!(output.height(), 90);
}

#[test]
fn test_short_sheet_falls_back_under_default_layout() {
    // Divisible by 4 but below the 256px heuristic: treated as a single
    // pre-cut row, so output keeps the full input height
    let buffer = make_solid_buffer(64, 128, BLUE);
    let params = ShearParams::default();

    let output = generate_diagonal(&buffer, Direction::SouthEast, &params).unwrap();
    assert_eq!(output.height(), 128);

    // A lowered threshold turns the same buffer into a proper sheet
    let layout = SheetLayout::with_min_height(64);
    let output =
        generate_diagonal_with_layout(&buffer, Direction::SouthEast, &params, &layout).unwrap();
    assert_eq!(output.height(), 32);
}

#[test]
fn test_all_diagonals_returns_four_rows() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_diagonals(&sheet, &params, &layout).unwrap();

    for direction in Direction::DIAGONALS {
        let row = set.get(direction).unwrap();
        assert_eq!(row.width(), 64);
        assert_eq!(row.height(), 64);
    }
    assert!(set.get(Direction::North).is_none());

    // Source row selection carries through the batch entry point
    assert_eq!(*set.ne.get_pixel(20, 10), BLUE);
    assert_eq!(*set.se.get_pixel(20, 10), RED);
}

#[test]
fn test_all_diagonals_fallback_keeps_input_size() {
    let buffer = make_solid_buffer(64, 90, BLUE);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_diagonals(&buffer, &params, &layout).unwrap();
    for direction in Direction::DIAGONALS {
        assert_eq!(set.get(direction).unwrap().height(), 90);
    }
}

#[test]
fn test_all_directions_cardinals_match_extraction() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_directions(&sheet, &params, &layout).unwrap();

    assert_eq!(set.s.as_raw(), extract_row(&sheet, 0).unwrap().as_raw());
    assert_eq!(set.w.as_raw(), extract_row(&sheet, 1).unwrap().as_raw());
    assert_eq!(set.n.as_raw(), extract_row(&sheet, 2).unwrap().as_raw());
    assert_eq!(set.e.as_raw(), extract_row(&sheet, 3).unwrap().as_raw());
}

#[test]
fn test_all_directions_diagonals_match_single_generation() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_directions(&sheet, &params, &layout).unwrap();

    for direction in Direction::DIAGONALS {
        let single = generate_diagonal(&sheet, direction, &params).unwrap();
        assert_eq!(set.get(direction).as_raw(), single.as_raw());
    }
}

#[test]
fn test_all_directions_misaligned_height_is_an_error() {
    let buffer = make_solid_buffer(64, 90, BLUE);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let result = generate_all_directions(&buffer, &params, &layout);
    assert!(matches!(
        result,
        Err(ForgeError::InvalidSheetDimensions(64, 90))
    ));
}

#[test]
fn test_all_directions_accepts_short_sheet() {
    // Below the heuristic but still row-addressable: accepted with a warning
    let buffer = make_test_sheet(64, 16);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_directions(&buffer, &params, &layout).unwrap();
    assert_eq!(set.n.height(), 16);
}

#[test]
fn test_combined_sheet_row_order() {
    let sheet = make_test_sheet(64, 64);
    let params = ShearParams::default();
    let layout = SheetLayout::default();

    let set = generate_all_directions(&sheet, &params, &layout).unwrap();
    let combined = set.into_combined_sheet().unwrap();

    assert_eq!(combined.width(), 64);
    assert_eq!(combined.height(), 64 * 8);

    // Band order is s, w, n, e, se, sw, ne, nw
    assert_eq!(*combined.get_pixel(20, 0 * 64 + 10), RED); // s
    assert_eq!(*combined.get_pixel(20, 2 * 64 + 10), BLUE); // n
    assert_eq!(*combined.get_pixel(20, 4 * 64 + 10), RED); // se leans the south row
    assert_eq!(*combined.get_pixel(20, 6 * 64 + 10), BLUE); // ne leans the north row
}
