//! Tests for the palette swap

use image::{Rgba, RgbaImage};

use crate::recolor::palette::{Palette, RgbColor};
use crate::recolor::swap::apply_palette_swap;

fn steel_palette() -> Palette {
    Palette::new(
        vec![RgbColor::new(128, 128, 128), RgbColor::new(96, 96, 96)],
        RgbColor::new(218, 165, 32),
    )
}

#[test]
fn test_swap_replaces_matching_pixels() {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
    image.put_pixel(1, 0, Rgba([96, 96, 96, 255]));
    image.put_pixel(0, 1, Rgba([10, 20, 30, 255]));
    image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

    let output = apply_palette_swap(&image, &steel_palette());

    assert_eq!(*output.get_pixel(0, 0), Rgba([218, 165, 32, 255]));
    assert_eq!(*output.get_pixel(1, 0), Rgba([218, 165, 32, 255]));
    assert_eq!(*output.get_pixel(0, 1), Rgba([10, 20, 30, 255]));
    assert_eq!(*output.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_swap_preserves_alpha() {
    let mut image = RgbaImage::new(1, 2);
    image.put_pixel(0, 0, Rgba([128, 128, 128, 100]));
    image.put_pixel(0, 1, Rgba([128, 128, 128, 0]));

    let output = apply_palette_swap(&image, &steel_palette());

    assert_eq!(*output.get_pixel(0, 0), Rgba([218, 165, 32, 100]));
    assert_eq!(*output.get_pixel(0, 1), Rgba([218, 165, 32, 0]));
}

#[test]
fn test_swap_matches_rgb_exactly() {
    // Off-by-one channel values must not be replaced
    let mut image = RgbaImage::new(1, 1);
    image.put_pixel(0, 0, Rgba([127, 128, 128, 255]));

    let output = apply_palette_swap(&image, &steel_palette());
    assert_eq!(*output.get_pixel(0, 0), Rgba([127, 128, 128, 255]));
}

#[test]
fn test_swap_leaves_source_untouched() {
    let mut image = RgbaImage::new(1, 1);
    image.put_pixel(0, 0, Rgba([128, 128, 128, 255]));

    let _ = apply_palette_swap(&image, &steel_palette());
    assert_eq!(*image.get_pixel(0, 0), Rgba([128, 128, 128, 255]));
}
