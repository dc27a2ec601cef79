use crate::error::{Error, Result};
use crate::modules::ModuleWidths;

/// Canvas configuration of a rendered barcode: the requested image size and
/// the horizontal safe margin kept free on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    width: u32,
    height: u32,
    safe_margin: u32,
}

impl Layout {
    /// Creates a layout of `width` x `height` pixels without safe margin.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, safe_margin: 0 }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of pixels reserved on the left and right edges.
    #[inline]
    pub const fn safe_margin(&self) -> u32 {
        self.safe_margin
    }

    /// Sets the number of pixels reserved on the left and right edges.
    pub const fn set_safe_margin(mut self, safe_margin: u32) -> Self {
        self.safe_margin = safe_margin;
        self
    }

    /// Computes the width of a module in pixels and the indent of the first
    /// module. The width is floored, the leftover pixels all go to the
    /// indent, so the barcode may be slightly narrower than the drawable
    /// area. An odd leftover pixel ends up on the right.
    pub fn place(&self, modules: u32) -> Result<Placement> {
        let drawable = self.width.saturating_sub(self.safe_margin.saturating_mul(2));
        let line_width = match (modules, self.height) {
            (0, _) | (_, 0) => 0,
            _ => drawable / modules,
        };

        if line_width == 0 {
            tracing::debug!(modules, width = self.width, height = self.height,
                safe_margin = self.safe_margin, "barcode does not fit the canvas");
            return Err(Error::InvalidLayout {
                canvas_width: self.width,
                canvas_height: self.height,
                safe_margin: self.safe_margin,
                modules,
            });
        }

        let indent = (self.width - modules * line_width) / 2;
        tracing::debug!(modules, line_width, indent, "placed barcode");
        Ok(Placement { modules, line_width, indent })
    }

    /// Paints the modules as full height vertical stripes on a white canvas.
    pub fn render(&self, widths: &ModuleWidths) -> Result<Raster> {
        let placement = self.place(widths.module_count())?;
        let line_width = placement.line_width as usize;
        let mut row = vec![false; self.width as usize];

        let mut x = placement.indent as usize;
        for bar in widths.modules() {
            if bar {
                row[x..x + line_width].fill(true);
            }
            x += line_width;
        }

        Ok(Raster { row, height: self.height, placement })
    }
}

/// Horizontal placement of the modules on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    modules: u32,
    line_width: u32,
    indent: u32,
}

impl Placement {
    #[inline]
    pub const fn modules(&self) -> u32 {
        self.modules
    }

    /// Width of one module in pixels.
    #[inline]
    pub const fn line_width(&self) -> u32 {
        self.line_width
    }

    /// X coordinate of the first module.
    #[inline]
    pub const fn indent(&self) -> u32 {
        self.indent
    }

    /// Width in pixels covered by the modules.
    #[inline]
    pub const fn span(&self) -> u32 {
        self.modules * self.line_width
    }
}

/// A black and white image of a barcode. Every row is identical, so only one
/// is stored. `true` is a black pixel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    row: Vec<bool>,
    height: u32,
    placement: Placement,
}

impl Raster {
    #[inline]
    pub fn width(&self) -> u32 {
        self.row.len() as u32
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the color of the pixel at (x, y), `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if y < self.height {
            self.row.get(x as usize).copied()
        } else {
            None
        }
    }

    /// Returns one row of pixels.
    #[inline]
    pub fn row(&self) -> &[bool] {
        &self.row
    }

    /// Iterates over all the pixels, row by row.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        core::iter::repeat(self.row.as_slice())
            .take(self.height as usize)
            .flatten()
            .copied()
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (px, bit) in target.iter_mut().zip(self.bits()) {
            *px = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Number of bytes of a row once packed by [Raster::fill_bitmap].
    #[inline]
    pub fn stride(&self) -> usize {
        (self.row.len() + 7) / 8
    }

    /// Packs the pixels one bit per pixel, most significant bit first, with
    /// every row starting on a new byte. A set bit is a black pixel.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        let stride = self.stride();
        for line in target.chunks_mut(stride).take(self.height as usize) {
            line.fill(0);
            for (x, &bit) in self.row.iter().enumerate() {
                if bit {
                    line[x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
    }

    pub fn to_bitmap(&self) -> Vec<u8> {
        let mut bitmap = vec![0u8; self.stride() * self.height as usize];
        self.fill_bitmap(&mut bitmap);
        bitmap
    }
}

/// Renders a module-width string on a `canvas_width` x `canvas_height`
/// canvas keeping `safe_margin` pixels free on the left and right edges.
pub fn render(widths: &ModuleWidths, canvas_width: u32, canvas_height: u32, safe_margin: u32) -> Result<Raster> {
    Layout::new(canvas_width, canvas_height)
        .set_safe_margin(safe_margin)
        .render(widths)
}
