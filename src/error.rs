use thiserror::Error;

/// Errors raised while encoding a payload or laying out its raster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The payload contains a character outside of `%` and `0`-`9`.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol { symbol: char, position: usize },

    /// The canvas can not hold at least one pixel per module.
    #[error("invalid layout: {modules} modules do not fit a {canvas_width}x{canvas_height} canvas with a safe margin of {safe_margin}")]
    InvalidLayout {
        canvas_width: u32,
        canvas_height: u32,
        safe_margin: u32,
        modules: u32,
    },

    /// A module-width string contains something other than a digit 1-9.
    #[error("invalid module width {digit:?} at position {position}")]
    InvalidModuleWidth { digit: char, position: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
