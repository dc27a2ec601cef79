use ean128::*;

mod utils;

fn main() -> Result<()> {
    utils::init_tracing();

    let symbols = Ean128Encoder::new()
        .append_char('%')?
        .append_num(2024)
        .append_str("0042")?
        .seal();
    println!("symbols: {:?} (check symbol {})", symbols.as_slice(), symbols.checksum());

    let raster = render(&symbols.module_widths(), 140, 8, 2)?;
    utils::display_bitmap(raster.width() as usize, &raster.to_bitmap());
    Ok(())
}
