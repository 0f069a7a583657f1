//! WCAG contrast ratio and readable text color selection.
//!
//! Luminance here is the WCAG 2.x definition computed directly on sRGB,
//! independent of the HCT engine. Its linearization breakpoint is the
//! WCAG `0.03928`, not the `0.04045` of the color-space transform.

use hct_color::{ColorError, Rgb, argb_from_hex, rgb_from_argb};

/// Minimum contrast for normal text under WCAG AA.
pub const WCAG_AA: f64 = 4.5;

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

#[inline]
fn linearize(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color per WCAG:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// [`contrast_ratio`] over two `#RRGGBB` strings.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(parse(a)?, parse(b)?))
}

/// Whether `fg` on `bg` reaches [`WCAG_AA`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if either color is malformed.
pub fn passes_wcag_aa(fg: &str, bg: &str) -> Result<bool, ColorError> {
    contrast_ratio_hex(fg, bg).map(|ratio| ratio >= WCAG_AA)
}

/// Pick black or white text for `background`.
///
/// A color that reaches [`WCAG_AA`] wins over one that does not. Between
/// two that both pass (or both fail) the higher contrast wins, and equal
/// contrast goes to black.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `background` is malformed.
pub fn best_text_color(background: &str) -> Result<&'static str, ColorError> {
    Ok(best_text_color_rgb(parse(background)?))
}

/// [`best_text_color`] for an already-parsed color.
#[must_use]
pub fn best_text_color_rgb(background: Rgb) -> &'static str {
    let with_white = contrast_ratio(background, Rgb::WHITE);
    let with_black = contrast_ratio(background, Rgb::BLACK);

    match (with_white >= WCAG_AA, with_black >= WCAG_AA) {
        (true, false) => WHITE,
        (false, true) => BLACK,
        _ if with_white > with_black => WHITE,
        _ => BLACK,
    }
}

fn parse(hex: &str) -> Result<Rgb, ColorError> {
    argb_from_hex(hex).map(rgb_from_argb)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
