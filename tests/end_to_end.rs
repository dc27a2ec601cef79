use ean128::*;

const PAYLOAD: &str = "%1234567890123";

#[test]
fn test_render_reference_payload() {
    let widths = encode(PAYLOAD).unwrap();
    let raster = render(&widths, 200, 50, 0).unwrap();

    assert_eq!((raster.width(), raster.height()), (200, 50));
    assert_eq!(raster.placement().line_width(), 1);
    assert_eq!(raster.placement().indent(), 5);

    let row = raster.row();
    assert!(row[..5].iter().all(|&b| !b));
    assert!(row[194..].iter().all(|&b| !b));
    assert_eq!(row.iter().filter(|&&b| b).count(), 102);
}

#[test]
fn test_render_is_reproducible() {
    let first = render(&encode(PAYLOAD).unwrap(), 200, 50, 0).unwrap();
    let second = render(&encode(PAYLOAD).unwrap(), 200, 50, 0).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_bitmap(), second.to_bitmap());
    assert_eq!(first.to_bitmap().len(), 25 * 50);
}

#[test]
fn test_unsupported_symbol() {
    assert_eq!(encode("A"), Err(Error::UnsupportedSymbol { symbol: 'A', position: 0 }));
    assert!(matches!(encode("%12-3"), Err(Error::UnsupportedSymbol { symbol: '-', position: 3 })));
}

#[test]
fn test_invalid_layout() {
    let widths = encode(PAYLOAD).unwrap();
    assert_eq!(render(&widths, 10, 50, 5), Err(Error::InvalidLayout {
        canvas_width: 10,
        canvas_height: 50,
        safe_margin: 5,
        modules: 189,
    }));
    assert!(matches!(render(&widths, 200, 50, 6), Err(Error::InvalidLayout { .. })));
    assert!(render(&widths, 200, 50, 5).is_ok());
}

#[test]
fn test_render_external_widths() {
    let widths: ModuleWidths = "2114121312221232".parse().unwrap();
    let raster = Layout::new(64, 4).set_safe_margin(2).render(&widths).unwrap();
    assert_eq!(raster.placement().line_width(), 2);
    assert_eq!(raster.row().iter().filter(|&&b| b).count(), widths.bar_count() as usize * 2);

    assert_eq!(ModuleWidths::parse("21a4"), Err(Error::InvalidModuleWidth { digit: 'a', position: 2 }));
}

#[test]
fn test_empty_payload() {
    let widths = encode("").unwrap();
    assert_eq!(widths.module_count(), ean128_modules!(0));
    let raster = render(&widths, 70, 1, 0).unwrap();
    assert_eq!(raster.placement().line_width(), 2);
}
