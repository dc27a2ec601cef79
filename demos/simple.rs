use ean128::*;

mod utils;

const PAYLOAD: &str = "%1234567890123";
const WIDTH: u32 = ean128_modules!(PAYLOAD.len() as u32) + 8;
const HEIGHT: u32 = 12;

fn main() -> Result<()> {
    utils::init_tracing();

    let widths = encode(PAYLOAD)?;
    let raster = Layout::new(WIDTH, HEIGHT)
        .set_safe_margin(4)
        .render(&widths)?;

    println!("{PAYLOAD} -> {widths}");
    utils::display_raster(&raster);
    Ok(())
}
