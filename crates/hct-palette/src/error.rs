//! Errors raised by the palette engine.

use hct_color::ColorError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A base or background color failed to parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("unknown curve function {0:?} (expected one of: linear, sine, cosine, quadratic, material, s-shaped)")]
    UnknownCurve(String),

    #[error("unknown functional palette type {0:?} (expected one of: pastel, bright, vivid, muted, deep)")]
    UnknownPaletteType(String),

    #[error("unknown functional scale style {0:?} (expected pastel or bright)")]
    UnknownScaleStyle(String),
}
