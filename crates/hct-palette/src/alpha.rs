//! Translucent variants of a solid color.

use hct_color::{ColorError, argb_from_hex, rgb8_from_argb};
use serde::Serialize;

/// Opacity levels every palette color is offered at.
pub const ALPHA_STEPS: [f64; 6] = [0.05, 0.1, 0.2, 0.4, 0.6, 0.8];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlphaVariant {
    pub alpha: f64,
    /// CSS `rgba(r, g, b, a)` with 8-bit channels.
    pub rgba: String,
    #[serde(skip)]
    pub rgb: (u8, u8, u8),
}

impl AlphaVariant {
    /// Opacity as a whole percentage, e.g. `5` for `0.05`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        // Safe: alpha is one of ALPHA_STEPS, all within [0, 1].
        (self.alpha * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// One [`AlphaVariant`] of `hex` per entry of [`ALPHA_STEPS`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is malformed.
pub fn generate_alpha_variants(hex: &str) -> Result<Vec<AlphaVariant>, ColorError> {
    let (r, g, b) = rgb8_from_argb(argb_from_hex(hex)?);
    Ok(ALPHA_STEPS
        .iter()
        .map(|&alpha| AlphaVariant { alpha, rgba: format!("rgba({r}, {g}, {b}, {alpha})"), rgb: (r, g, b) })
        .collect())
}
