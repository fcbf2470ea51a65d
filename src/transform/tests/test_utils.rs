//! Shared fixtures for transform tests

use image::{Rgba, RgbaImage};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Solid colors of the four direction rows, in row order (S, W, N, E)
pub const ROW_COLORS: [Rgba<u8>; 4] = [RED, GREEN, BLUE, YELLOW];

/// Build a 4-row test sheet with one solid color per direction row
///
/// Each row additionally carries a white marker pixel at (5, 5) within the
/// row, so crops can be checked for exact positioning and not just color.
pub fn make_test_sheet(width: u32, row_height: u32) -> RgbaImage {
    let mut sheet = RgbaImage::new(width, row_height * 4);
    for row in 0..4u32 {
        for y in 0..row_height {
            for x in 0..width {
                sheet.put_pixel(x, row * row_height + y, ROW_COLORS[row as usize]);
            }
        }
        sheet.put_pixel(5, row * row_height + 5, WHITE);
    }
    sheet
}

/// Build a fully transparent buffer with a single marked pixel
pub fn make_marker_buffer(width: u32, height: u32, x: u32, y: u32, color: Rgba<u8>) -> RgbaImage {
    let mut buffer = RgbaImage::new(width, height);
    buffer.put_pixel(x, y, color);
    buffer
}

/// Build a buffer filled with one solid color
pub fn make_solid_buffer(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}
