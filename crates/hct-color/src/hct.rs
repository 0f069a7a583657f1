// SPDX-License-Identifier: MIT
//
// The HCT color value.
//
// An `Hct` always describes a color that can actually be displayed. Built
// from ARGB it is simply the LCH of that color. Built from a (hue, chroma,
// tone) request, the chroma is clamped to what sRGB can show at that hue
// and tone, and hue/chroma/tone are re-derived from the clamped floating
// point RGB. Only the packed ARGB is rounded to 8 bits, so the reported
// coordinates can sit slightly off those of `to_int()`. A request
// therefore does not always round-trip to itself.

use std::fmt;

use serde::Serialize;

use crate::gamut::find_max_chroma;
use crate::hex::{ColorError, argb_from_hex, argb_from_rgb, hex_from_argb, rgb8_from_argb, rgb_from_argb};
use crate::transform::{Lch, Rgb, lch_to_rgb, normalize_hue, rgb_to_lch};

/// Effective chroma below this realizes as neutral gray.
pub const NEUTRAL_CHROMA_EPSILON: f64 = 1e-4;

/// A displayable color in hue/chroma/tone coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    #[serde(skip)]
    argb: u32,
}

impl Hct {
    /// Realize the closest displayable color to the requested coordinates.
    ///
    /// Hue wraps into [0, 360) and tone is clamped to [0, 100]. Chroma
    /// above the gamut boundary is reduced to the boundary; the returned
    /// value reports the coordinates of the realized color, not the request.
    #[must_use]
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        let hue = normalize_hue(hue);
        let tone = tone.clamp(0.0, 100.0);
        let rgb = realize(hue, chroma, tone);
        let lch = rgb_to_lch(rgb);
        Self { hue: lch.h, chroma: lch.c, tone: lch.l, argb: argb_from_rgb(rgb) }
    }

    /// The HCT coordinates of an ARGB color. The color itself is kept as is.
    #[must_use]
    pub fn from_int(argb: u32) -> Self {
        let lch = rgb_to_lch(rgb_from_argb(argb));
        Self { hue: lch.h, chroma: lch.c, tone: lch.l, argb }
    }

    /// Parse `#RRGGBB` into an HCT value.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for anything but six hex
    /// digits with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        argb_from_hex(hex).map(Self::from_int)
    }

    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    #[inline]
    #[must_use]
    pub const fn tone(&self) -> f64 {
        self.tone
    }

    /// Packed ARGB of the realized color.
    #[inline]
    #[must_use]
    pub const fn to_int(&self) -> u32 {
        self.argb
    }

    /// Uppercase `#RRGGBB` of the realized color.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex_from_argb(self.argb)
    }

    #[inline]
    #[must_use]
    pub const fn to_rgb8(&self) -> (u8, u8, u8) {
        rgb8_from_argb(self.argb)
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Parse `#RRGGBB` and return its hue, chroma and tone.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] on malformed input.
pub fn hex_to_hct(hex: &str) -> Result<Hct, ColorError> {
    Hct::from_hex(hex)
}

/// The sRGB color a normalized (hue, chroma, tone) request realizes to.
fn realize(hue: f64, chroma: f64, tone: f64) -> Rgb {
    if tone <= 0.0 {
        return Rgb::BLACK;
    }
    if tone >= 100.0 {
        return Rgb::WHITE;
    }

    let max = find_max_chroma(hue, tone);
    let actual = chroma.min(max.chroma);

    if actual < NEUTRAL_CHROMA_EPSILON {
        return Rgb::gray(tone / 100.0);
    }
    if chroma <= max.chroma {
        return lch_to_rgb(Lch { l: tone, c: actual, h: hue });
    }

    tracing::trace!(hue, tone, requested = chroma, max = max.chroma, "chroma clipped to gamut");
    max.rgb
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn coordinates_come_from_unrounded_rgb() {
        let hct = Hct::new(0.0, 0.0, 50.0);
        let exact = rgb_to_lch(Rgb::gray(0.5));
        assert!(approx_eq(hct.tone(), exact.l, 1e-9), "tone: {}", hct.tone());

        let packed = Hct::from_int(hct.to_int());
        assert!((packed.tone() - hct.tone()).abs() > 0.01, "packed tone: {}", packed.tone());
    }

    fn hex(s: &str) -> u32 {
        argb_from_hex(s).unwrap()
    }

    /// Channel-wise distance between two ARGB colors.
    fn max_channel_diff(a: u32, b: u32) -> u8 {
        let (ar, ag, ab) = rgb8_from_argb(a);
        let (br, bg, bb) = rgb8_from_argb(b);
        ar.abs_diff(br).max(ag.abs_diff(bg)).max(ab.abs_diff(bb))
    }

    #[test]
    fn from_int_reference_blue() {
        let hct = Hct::from_int(hex("#1E88E5"));
        assert!(approx_eq(hct.hue(), 275.2242, 1e-3), "hue: {}", hct.hue());
        assert!(approx_eq(hct.chroma(), 55.2667, 1e-3), "chroma: {}", hct.chroma());
        assert!(approx_eq(hct.tone(), 55.6218, 1e-3), "tone: {}", hct.tone());
        assert_eq!(hct.to_int(), 0xff1e_88e5);
    }

    #[test]
    fn from_int_reference_red() {
        let hct = Hct::from_int(hex("#D32F2F"));
        assert!(approx_eq(hct.hue(), 33.153, 1e-2));
        assert!(approx_eq(hct.chroma(), 74.377, 1e-2));
        assert!(approx_eq(hct.tone(), 47.095, 1e-2));
    }

    #[test]
    fn round_trip_within_one_step() {
        let colors = [
            "#FF0000", "#00FF00", "#1E88E5", "#D32F2F", "#388E3C", "#1976D2", "#FFA000",
            "#808080", "#123456", "#FFFFFF", "#000000", "#7F3FBF", "#00BCD4", "#FFEB3B",
        ];
        for color in colors {
            let argb = hex(color);
            let hct = Hct::from_int(argb);
            let again = Hct::new(hct.hue(), hct.chroma(), hct.tone());
            let diff = max_channel_diff(argb, again.to_int());
            assert!(diff <= 1, "{color} realized as {again} (off by {diff})");
        }
    }

    #[test]
    fn out_of_gamut_chroma_is_clamped() {
        let hct = Hct::new(275.22, 1000.0, 50.0);
        assert_eq!(hct.to_hex(), "#007AD1");
        let max = find_max_chroma(275.22, 50.0).chroma;
        assert!(hct.chroma() < max + 0.1, "chroma {} above max {max}", hct.chroma());
        assert!(approx_eq(hct.hue(), 275.22, 0.5));
        assert!(approx_eq(hct.tone(), 50.0, 0.01));
    }

    #[test]
    fn hue_wraps() {
        let wrapped = Hct::new(-84.78, 40.0, 50.0);
        assert_eq!(wrapped.to_hex(), "#4579BB");
        assert_eq!(Hct::new(275.22 + 720.0, 40.0, 50.0).to_hex(), "#4579BB");
        assert!(approx_eq(wrapped.hue(), 275.25, 0.01), "hue: {}", wrapped.hue());
    }

    #[test]
    fn zero_chroma_is_gray() {
        assert_eq!(Hct::new(0.0, 0.0, 50.0).to_hex(), "#808080");
        assert_eq!(Hct::new(120.0, 0.000_05, 73.0).to_hex(), "#BABABA");
    }

    #[test]
    fn negative_chroma_is_gray() {
        assert_eq!(Hct::new(0.0, -5.0, 30.0).to_hex(), "#4D4D4D");
    }

    #[test]
    fn gray_tone_is_rederived() {
        // r = g = b = tone / 100 is not L* = tone.
        let hct = Hct::new(0.0, 0.0, 50.0);
        assert!(approx_eq(hct.tone(), 53.389, 1e-2), "tone: {}", hct.tone());
        assert!(hct.chroma() < 0.01);
    }

    #[test]
    fn tone_extremes() {
        assert_eq!(Hct::new(200.0, 30.0, 0.0).to_hex(), "#000000");
        assert_eq!(Hct::new(200.0, 30.0, 100.0).to_hex(), "#FFFFFF");
    }

    #[test]
    fn tone_is_clamped() {
        assert_eq!(Hct::new(200.0, 30.0, 150.0).to_hex(), "#FFFFFF");
        let black = Hct::new(200.0, 30.0, -10.0);
        assert_eq!(black.to_hex(), "#000000");
        assert!(black.tone().abs() < 1e-9);
    }

    #[test]
    fn in_gamut_request_keeps_chroma() {
        let hct = Hct::new(40.0, 104.526, 53.241);
        assert_eq!(hct.to_hex(), "#FF0000");
        assert!(approx_eq(hct.chroma(), 104.5, 0.01));
    }

    #[test]
    fn hex_helpers() {
        let hct = hex_to_hct("1976d2").unwrap();
        assert_eq!(hct.to_hex(), "#1976D2");
        assert_eq!(hct.to_string(), "#1976D2");
        assert_eq!(hct.to_rgb8(), (0x19, 0x76, 0xd2));
        assert!(approx_eq(hct.hue(), 278.866, 1e-2));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(
            hex_to_hct("#abc"),
            Err(ColorError::InvalidColorFormat("#abc".to_owned()))
        );
    }
}
