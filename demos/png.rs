use std::error::Error;

mod utils;

/// Usage: png [PAYLOAD] [OUTPUT]
fn main() -> Result<(), Box<dyn Error>> {
    utils::init_tracing();

    let mut args = std::env::args().skip(1);
    let payload = args.next().unwrap_or_else(|| "%1234567890123".to_owned());
    let output = args.next().unwrap_or_else(|| "ean128.png".to_owned());

    let widths = ean128::encode(&payload)?;
    let raster = ean128::render(&widths, 200, 50, 0)?;
    ean128::persist::save_png(&raster, &output)?;

    println!("{payload} written to {output}");
    Ok(())
}
