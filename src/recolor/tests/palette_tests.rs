//! Tests for palette parsing and the built-in registry

use std::fs;

use crate::recolor::palette::{Palette, RgbColor};
use crate::recolor::registry::{load_palette_file, named_palette, palette_names};
use crate::sheet::errors::ForgeError;

#[test]
fn test_parse_color() {
    assert_eq!(RgbColor::parse("128,128,128").unwrap(), RgbColor::new(128, 128, 128));
    assert_eq!(RgbColor::parse(" 0, 255 , 32 ").unwrap(), RgbColor::new(0, 255, 32));
}

#[test]
fn test_parse_color_rejects_malformed_input() {
    assert!(RgbColor::parse("1,2").is_err());
    assert!(RgbColor::parse("1,2,3,4").is_err());
    assert!(RgbColor::parse("300,0,0").is_err());
    assert!(RgbColor::parse("red,0,0").is_err());
    assert!(RgbColor::parse("").is_err());
}

#[test]
fn test_color_display_round_trip() {
    let color = RgbColor::new(218, 165, 32);
    assert_eq!(RgbColor::parse(&color.to_string()).unwrap(), color);
}

#[test]
fn test_palette_from_strings() {
    let sources = vec!["128,128,128".to_string(), "96,96,96".to_string()];
    let palette = Palette::from_strings(&sources, "0,255,0").unwrap();

    assert_eq!(palette.sources.len(), 2);
    assert_eq!(palette.replacement, RgbColor::new(0, 255, 0));
}

#[test]
fn test_palette_requires_sources() {
    let result = Palette::from_strings(&[], "0,255,0");
    assert!(matches!(result, Err(ForgeError::GenericError(_))));
}

#[test]
fn test_builtin_registry_lookup() {
    let palette = named_palette("steel-to-gold").expect("registry palette missing");
    assert!(!palette.sources.is_empty());
    assert_eq!(palette.replacement, RgbColor::new(218, 165, 32));

    assert!(named_palette("no-such-palette").is_none());
}

#[test]
fn test_load_palette_file() {
    let dir = std::env::temp_dir().join(format!("spriteforge_palette_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join("rust.toml");
    fs::write(
        &path,
        "sources = [\"128,128,128\", \"96,96,96\"]\nreplacement = \"183,65,14\"\n",
    )
    .unwrap();

    let palette = load_palette_file(&path).unwrap();
    assert_eq!(palette.sources.len(), 2);
    assert_eq!(palette.replacement, RgbColor::new(183, 65, 14));

    fs::write(&path, "replacement = \"1,2,3\"\n").unwrap();
    assert!(load_palette_file(&path).is_err());
}

#[test]
fn test_builtin_registry_names_sorted() {
    let names = palette_names();
    assert!(names.contains(&"steel-to-gold".to_string()));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
