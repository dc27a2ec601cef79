//! Code128 / GS1-128 ("EAN128") encoder and rasterizer.
//!
//! A payload made of `%` and the digits `0`-`9` is first turned into its
//! module-width string (start symbol, one symbol per character, weighted
//! modulo 103 check symbol and stop symbol), which is then painted as
//! vertical stripes on a fixed size black and white canvas.
//!
//! ```
//! let widths = ean128::encode("%1234567890123")?;
//! let raster = ean128::render(&widths, 200, 50, 0)?;
//! assert_eq!((raster.width(), raster.height()), (200, 50));
//! # Ok::<(), ean128::Error>(())
//! ```
//!
//! With the `embedded-graphics` feature a [Raster] is a `Drawable` and with
//! the `image` feature the [persist] module writes it as a PNG file.

mod error;
mod tables;
mod modules;
mod encoder;
mod render;
#[cfg(feature = "embedded-graphics")]
mod graphics;
#[cfg(feature = "image")]
pub mod persist;

pub use error::{Error, Result};
pub use tables::{CODE128_TABLE, START_CODE, STOP_CODE, CHECKSUM_MODULO, symbol_value};
pub use modules::{ModuleWidths, Modules};
pub use encoder::{lookup_index, checksum, encode, encode_symbols, Ean128Encoder, Symbols};
pub use render::{render, Layout, Placement, Raster};

/// Number of modules of a payload of `len` characters once encoded.
#[macro_export]
macro_rules! ean128_modules {
    ($len:expr) => { 11 * ($len + 2) + 13 }
}
