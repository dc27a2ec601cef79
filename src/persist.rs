//! Writes rendered barcodes to PNG images. Rendering never persists
//! anything by itself, callers pick the destination.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use thiserror::Error;

use crate::render::Raster;

pub const BLACK: Luma<u8> = Luma([0]);
pub const WHITE: Luma<u8> = Luma([255]);

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Converts a raster to an 8-bit grayscale image holding only black and
/// white pixels.
pub fn to_gray_image(raster: &Raster) -> GrayImage {
    let row = raster.row();
    GrayImage::from_fn(raster.width(), raster.height(), |x, _| {
        if row[x as usize] { BLACK } else { WHITE }
    })
}

/// Encodes a raster as PNG into `writer`.
pub fn write_png<W: Write + Seek>(raster: &Raster, writer: &mut W) -> Result<(), PersistenceError> {
    to_gray_image(raster).write_to(writer, ImageFormat::Png)?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the raster as PNG.
pub fn save_png(raster: &Raster, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), width = raster.width(), height = raster.height(), "saving barcode");

    let mut writer = BufWriter::new(File::create(path)?);
    write_png(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode, render};

    #[test]
    fn test_to_gray_image() {
        let raster = render(&encode("%1234567890123").unwrap(), 200, 50, 0).unwrap();
        let image = to_gray_image(&raster);
        assert_eq!(image.dimensions(), (200, 50));

        for (x, y, px) in image.enumerate_pixels() {
            let expected = if raster.get(x, y) == Some(true) { BLACK } else { WHITE };
            assert_eq!(*px, expected);
        }
    }
}
