#![cfg(feature = "image")]

use std::io::Cursor;

use ean128::persist::{save_png, write_png, PersistenceError};
use tempfile::TempDir;

fn reference() -> ean128::Raster {
    let widths = ean128::encode("%1234567890123").unwrap();
    ean128::render(&widths, 200, 50, 0).unwrap()
}

#[test]
fn test_save_png_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("barcode.png");
    let raster = reference();

    save_png(&raster, &path).unwrap();

    let image = image::open(&path).unwrap().into_luma8();
    assert_eq!(image.dimensions(), (200, 50));
    for (x, y, px) in image.enumerate_pixels() {
        let black = raster.get(x, y).unwrap();
        assert_eq!(px.0[0], if black { 0 } else { 255 }, "({x}, {y})");
    }
}

#[test]
fn test_write_png_is_reproducible() {
    let raster = reference();
    let mut first = Cursor::new(Vec::new());
    let mut second = Cursor::new(Vec::new());

    write_png(&raster, &mut first).unwrap();
    write_png(&raster, &mut second).unwrap();

    assert!(first.get_ref().starts_with(b"\x89PNG"));
    assert_eq!(first.into_inner(), second.into_inner());
}

#[test]
fn test_save_png_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing").join("barcode.png");

    let err = save_png(&reference(), &path).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
    assert!(!path.exists());
}
