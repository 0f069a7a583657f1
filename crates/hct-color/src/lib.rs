// SPDX-License-Identifier: MIT
//
// hct-color — the color-space engine behind hct-gen.
//
// A hand-rolled Hue/Chroma/Tone model built on CIE LCH. "Tone" is L*,
// "chroma" and "hue" are the polar Lab coordinates. This is not CAM16:
// every palette this workspace produces is pinned to the LCH math below,
// so it stays exactly as it is.
//
// Conversion pipeline:
//
//   ARGB ↔ sRGB ↔ Linear sRGB ↔ XYZ (D65) ↔ Lab ↔ LCH = HCT
//
// The gamut solver bisects chroma at a fixed (hue, tone) to find the most
// colorful displayable color, and `Hct::new` uses it to clamp requests
// that fall outside sRGB.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Plain arithmetic keeps results bit-identical to the reference palettes.
#![allow(clippy::suboptimal_flops)]
// Hue/chroma/tone and l/a/b names are inherently similar.
#![allow(clippy::similar_names)]

pub mod gamut;
pub mod hct;
pub mod hex;
pub mod transform;

pub use gamut::{MaxChroma, find_max_chroma, in_gamut};
pub use hct::{Hct, hex_to_hct};
pub use hex::{
    ColorError, argb_from_hex, argb_from_rgb, argb_from_rgb8, hex_from_argb, rgb_from_argb,
    rgb8_from_argb,
};
pub use transform::{Lab, Lch, LinearRgb, Rgb, Xyz};
