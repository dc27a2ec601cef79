use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::render::Raster;

impl OriginDimensions for Raster {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Draws the raster at the origin of the target, bars as [BinaryColor::On].
/// Use `target.translated(..)` to place it elsewhere.
impl Drawable for Raster {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let colors = self.bits().map(|bar| if bar { BinaryColor::On } else { BinaryColor::Off });
        target.fill_contiguous(&self.bounding_box(), colors)
    }
}
