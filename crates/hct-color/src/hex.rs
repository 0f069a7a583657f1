// SPDX-License-Identifier: MIT
//
// Hex strings and packed ARGB integers.
//
// Palettes are keyed by their hex values downstream, so the accepted input
// is deliberately narrow: exactly six hex digits, optionally prefixed with
// `#`. Shorthand (`#RGB`) and alpha forms are rejected rather than guessed.
// Output is always uppercase `#RRGGBB`.

use thiserror::Error;

use crate::transform::Rgb;

/// Errors produced when parsing color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a six-digit `#RRGGBB` hex color.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
}

/// Opaque alpha channel, pre-shifted.
const OPAQUE: u32 = 0xff00_0000;

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse `#RRGGBB` (or `RRGGBB`) into an opaque ARGB integer.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the string is not exactly
/// six hex digits after the optional `#`.
pub fn argb_from_hex(s: &str) -> Result<u32, ColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(ColorError::InvalidColorFormat(s.to_owned()));
    }

    let mut rgb: u32 = 0;
    for &byte in bytes {
        let nibble =
            parse_hex_digit(byte).ok_or_else(|| ColorError::InvalidColorFormat(s.to_owned()))?;
        rgb = rgb << 4 | u32::from(nibble);
    }
    Ok(OPAQUE | rgb)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Format the RGB part of an ARGB integer as uppercase `#RRGGBB`.
#[must_use]
pub fn hex_from_argb(argb: u32) -> String {
    let (r, g, b) = rgb8_from_argb(argb);
    format!("#{r:02X}{g:02X}{b:02X}")
}

// ─── ARGB Packing ────────────────────────────────────────────────────────────

/// Split an ARGB integer into its 8-bit red, green and blue channels.
#[inline]
#[must_use]
pub const fn rgb8_from_argb(argb: u32) -> (u8, u8, u8) {
    let [_, r, g, b] = argb.to_be_bytes();
    (r, g, b)
}

/// Pack 8-bit channels into an opaque ARGB integer.
#[inline]
#[must_use]
pub const fn argb_from_rgb8(r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([0xff, r, g, b])
}

/// Unpack an ARGB integer into sRGB components in [0, 1].
#[must_use]
pub fn rgb_from_argb(argb: u32) -> Rgb {
    let (r, g, b) = rgb8_from_argb(argb);
    Rgb::from_rgb8(r, g, b)
}

/// Pack sRGB components into an opaque ARGB integer.
///
/// Each channel is rounded to the nearest 8-bit step and clamped, which
/// absorbs the small out-of-cube tolerance the gamut solver allows.
#[must_use]
pub fn argb_from_rgb(rgb: Rgb) -> u32 {
    argb_from_rgb8(to_u8(rgb.r), to_u8(rgb.g), to_u8(rgb.b))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
