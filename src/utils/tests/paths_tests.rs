//! Tests for batch path helpers

use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::paths::{collect_png_files, mirrored_output_path, with_stem_suffix};

fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "spriteforge_{}_{}",
        test_name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_collect_png_files_recursive_and_sorted() {
    let root = scratch_dir("collect");
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a/nested")).unwrap();
    fs::write(root.join("b/second.png"), b"").unwrap();
    fs::write(root.join("a/first.png"), b"").unwrap();
    fs::write(root.join("a/nested/third.PNG"), b"").unwrap();
    fs::write(root.join("a/notes.txt"), b"").unwrap();

    let files = collect_png_files(&root).unwrap();

    assert_eq!(files.len(), 3);
    assert!(files[0].ends_with("a/first.png"));
    assert!(files[1].ends_with("a/nested/third.PNG"));
    assert!(files[2].ends_with("b/second.png"));
}

#[test]
fn test_collect_png_files_missing_root() {
    let root = scratch_dir("collect_missing");
    assert!(collect_png_files(&root.join("nowhere")).is_err());
}

#[test]
fn test_mirrored_output_path() {
    let source_root = Path::new("/assets/source");
    let file = Path::new("/assets/source/torso/male.png");
    let output_root = Path::new("/assets/out");

    let mirrored = mirrored_output_path(source_root, file, output_root).unwrap();
    assert_eq!(mirrored, PathBuf::from("/assets/out/torso/male.png"));
}

#[test]
fn test_mirrored_output_path_outside_root() {
    let source_root = Path::new("/assets/source");
    let file = Path::new("/assets/other/male.png");
    let output_root = Path::new("/assets/out");

    assert!(mirrored_output_path(source_root, file, output_root).is_err());
}

#[test]
fn test_with_stem_suffix() {
    assert_eq!(
        with_stem_suffix(Path::new("out/hero.png"), "_ne"),
        PathBuf::from("out/hero_ne.png")
    );
    assert_eq!(
        with_stem_suffix(Path::new("hero"), "_sw"),
        PathBuf::from("hero_sw.png")
    );
}
