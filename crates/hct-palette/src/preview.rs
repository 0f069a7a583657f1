//! Cheap tonal preview without the HCT engine.
//!
//! Scales the base color toward black for tones darker than its (raw,
//! non-linearized) luminance and blends it toward white for lighter ones.
//! It is only a sketch of the real palette and is kept for side-by-side
//! comparison with [`crate::palette::generate_tonal_palette`].

use hct_color::{ColorError, Rgb, argb_from_hex, argb_from_rgb, hex_from_argb, rgb_from_argb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEntry {
    pub tone: u8,
    pub hex: String,
}

/// Approximate `base_hex` at each of `tones`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn approximate_tonal_palette(base_hex: &str, tones: &[u8]) -> Result<Vec<PreviewEntry>, ColorError> {
    let base = rgb_from_argb(argb_from_hex(base_hex)?);
    let luminance = 0.2126 * base.r + 0.7152 * base.g + 0.0722 * base.b;

    Ok(tones
        .iter()
        .map(|&tone| PreviewEntry { tone, hex: approximate(base, luminance, tone) })
        .collect())
}

fn approximate(base: Rgb, luminance: f64, tone: u8) -> String {
    if tone == 0 {
        return "#000000".to_owned();
    }
    if tone >= 100 {
        return "#FFFFFF".to_owned();
    }

    let factor = f64::from(tone) / 100.0;
    let rgb = if factor < luminance {
        let t = factor / luminance;
        Rgb::new(base.r * t, base.g * t, base.b * t)
    } else {
        let t = (factor - luminance) / (1.0 - luminance);
        Rgb::new(
            base.r + (1.0 - base.r) * t,
            base.g + (1.0 - base.g) * t,
            base.b + (1.0 - base.b) * t,
        )
    };
    hex_from_argb(argb_from_rgb(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::PLUGIN_TONE_STEPS;
    use pretty_assertions::assert_eq;

    #[test]
    fn reference_blue() {
        let preview = approximate_tonal_palette("#1E88E5", &PLUGIN_TONE_STEPS).unwrap();
        let hexes: Vec<&str> = preview.iter().map(|e| e.hex.as_str()).collect();
        assert_eq!(
            hexes,
            vec![
                "#000000", "#030C13", "#051727", "#061D31", "#0D3A61", "#135792", "#1973C2",
                "#2A8EE6", "#55A5EB", "#7FBBF0", "#AAD2F5", "#D4E8FA", "#EAF4FD", "#FBFDFF",
                "#FFFFFF",
            ]
        );
    }

    #[test]
    fn white_and_black_bases_meet_at_mid_gray() {
        let white = approximate_tonal_palette("#FFFFFF", &[50]).unwrap();
        let black = approximate_tonal_palette("#000000", &[50]).unwrap();
        assert_eq!(white[0].hex, "#808080");
        assert_eq!(black[0].hex, "#808080");
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(approximate_tonal_palette("#ZZZZZZ", &[50]).is_err());
    }
}
