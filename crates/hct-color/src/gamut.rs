// SPDX-License-Identifier: MIT
//
// Gamut solver — the maximum displayable chroma at a given hue and tone.
//
// For a fixed hue and tone, sRGB membership is monotone non-increasing in
// chroma: once a chroma leaves the unit cube, every larger chroma does too.
// That makes the boundary bisectable. Twenty halvings of [0, 150] resolve
// chroma to ~1.4e-4, which is well below one 8-bit step.
//
// The work per call is bounded by construction: exactly `ITERATIONS`
// conversions, no early exit, no allocation.

use crate::transform::{Lch, Rgb, lch_to_rgb};

/// Upper bound of the chroma search interval.
pub const CHROMA_SEARCH_MAX: f64 = 150.0;

/// Bisection steps per solve.
pub const ITERATIONS: usize = 20;

/// Per-channel slack allowed outside [0, 1] when testing gamut membership.
pub const GAMUT_TOLERANCE: f64 = 1e-4;

/// Tones within this distance of 0 or 100 solve to black or white.
pub const TONE_EPSILON: f64 = 1e-4;

/// Result of [`find_max_chroma`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxChroma {
    /// Largest in-gamut chroma found.
    pub chroma: f64,
    /// The sRGB color at that chroma. May exceed [0, 1] by up to
    /// [`GAMUT_TOLERANCE`] per channel.
    pub rgb: Rgb,
}

/// Whether every channel lies within the unit cube, allowing
/// [`GAMUT_TOLERANCE`] of slack on both sides.
#[inline]
#[must_use]
pub fn in_gamut(rgb: Rgb) -> bool {
    let lo = -GAMUT_TOLERANCE;
    let hi = 1.0 + GAMUT_TOLERANCE;
    (lo..=hi).contains(&rgb.r) && (lo..=hi).contains(&rgb.g) && (lo..=hi).contains(&rgb.b)
}

/// Binary-search the maximum chroma representable in sRGB at `hue` and
/// `tone`.
///
/// Tones at (or within [`TONE_EPSILON`] of) the ends of the range have no
/// chroma at all and return black or white directly.
#[must_use]
pub fn find_max_chroma(hue: f64, tone: f64) -> MaxChroma {
    if tone <= TONE_EPSILON {
        return MaxChroma { chroma: 0.0, rgb: Rgb::BLACK };
    }
    if tone >= 100.0 - TONE_EPSILON {
        return MaxChroma { chroma: 0.0, rgb: Rgb::WHITE };
    }

    let mut low = 0.0;
    let mut high = CHROMA_SEARCH_MAX;
    let mut best = MaxChroma { chroma: 0.0, rgb: Rgb::BLACK };

    for _ in 0..ITERATIONS {
        let mid = (low + high) / 2.0;
        let rgb = lch_to_rgb(Lch { l: tone, c: mid, h: hue });

        if in_gamut(rgb) {
            best = MaxChroma { chroma: mid, rgb };
            low = mid;
        } else {
            high = mid;
        }
    }

    best
}

// ─── Tests ───────────────────────────────────────────────────────────────────
