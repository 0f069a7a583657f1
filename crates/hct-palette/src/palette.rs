//! Palette generation: a base color swept across tones.
//!
//! Every generator here is one [`PaletteRequest`]: a base color, a
//! [`ToneSampling`] deciding which tones to realize, and a [`ChromaShape`]
//! deciding how colorful each of them is. The base color contributes its
//! hue (always) and its chroma (for shapes that use it). Each tone is then
//! realized through [`Hct::new`], which clamps to the displayable gamut.
//!
//! ```text
//!   base hex ──► Hct::from_int ──► (hue, chroma)
//!                                      │
//!   ToneSampling ──► tones ────────────┤
//!                                      ▼
//!   ChromaShape ──► chroma per tone ──► Hct::new ──► PaletteEntry
//! ```

use hct_color::{ColorError, Hct, argb_from_rgb8, hex_from_argb};
use serde::Serialize;

use crate::chroma::ChromaShape;
use crate::curve::{
    CurveFunction, CurveProperty, PLUGIN_TONE_STEPS, apply_curve_function, tone_steps,
};

/// One realized tone of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub tone: f64,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// Chroma requested at this tone, before gamut clamping.
    pub chroma: f64,
}

/// How a palette picks its tones.
#[derive(Debug, Clone, PartialEq)]
pub enum ToneSampling {
    /// `count` tones distributed by a curve (see [`tone_steps`]).
    Curve { count: usize, curve: CurveFunction, include_extremes: bool },
    /// An explicit tone list, realized as given.
    Fixed(Vec<u8>),
    /// An explicit tone list, each tone reshaped by
    /// [`apply_curve_function`]. Chroma is shaped on the listed tone and
    /// the color realized at the reshaped one.
    Remapped { steps: Vec<u8>, curve: CurveFunction },
}

impl ToneSampling {
    /// `(shaping tone, realized tone)` pairs in palette order.
    fn tones(&self) -> Vec<(f64, f64)> {
        match self {
            Self::Curve { count, curve, include_extremes } => tone_steps(*count, *curve, *include_extremes)
                .into_iter()
                .map(|t| (f64::from(t), f64::from(t)))
                .collect(),
            Self::Fixed(steps) => steps.iter().map(|&t| (f64::from(t), f64::from(t))).collect(),
            Self::Remapped { steps, curve } => steps
                .iter()
                .map(|&t| {
                    let tone = f64::from(t);
                    (tone, apply_curve_function(tone, 100.0, *curve, CurveProperty::Tone))
                })
                .collect(),
        }
    }
}

/// A complete description of one palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRequest {
    pub base: Hct,
    pub sampling: ToneSampling,
    pub chroma: ChromaShape,
}

/// Realize every tone of `request`.
#[must_use]
pub fn generate_palette(request: &PaletteRequest) -> Vec<PaletteEntry> {
    let hue = request.base.hue();
    let base_chroma = request.base.chroma();

    let entries: Vec<PaletteEntry> = request
        .sampling
        .tones()
        .into_iter()
        .map(|(shaping_tone, tone)| {
            let chroma = request.chroma.chroma_at(base_chroma, shaping_tone);
            let color = Hct::new(hue, chroma, tone);
            PaletteEntry { tone, hex: color.to_hex(), chroma }
        })
        .collect();

    tracing::debug!(
        base = %request.base,
        shape = ?request.chroma,
        len = entries.len(),
        "generated palette"
    );
    entries
}

// ─── Named Generators ────────────────────────────────────────────────────────

/// Tonal palette: curve-sampled tones with bell-shaped chroma.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn generate_tonal_palette(
    base_hex: &str,
    curve: CurveFunction,
    step_count: usize,
    include_extremes: bool,
) -> Result<Vec<PaletteEntry>, ColorError> {
    Ok(generate_palette(&PaletteRequest {
        base: Hct::from_hex(base_hex)?,
        sampling: ToneSampling::Curve { count: step_count, curve, include_extremes },
        chroma: ChromaShape::Bell,
    }))
}

/// Neutral palette: the same tones at a low, V-shaped chroma in the base hue.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn generate_neutral_palette(
    base_hex: &str,
    curve: CurveFunction,
    step_count: usize,
    include_extremes: bool,
) -> Result<Vec<PaletteEntry>, ColorError> {
    Ok(generate_palette(&PaletteRequest {
        base: Hct::from_hex(base_hex)?,
        sampling: ToneSampling::Curve { count: step_count, curve, include_extremes },
        chroma: ChromaShape::Neutral,
    }))
}

/// The 15 fixed design-tool tones at the base color's own chroma.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn generate_plugin_palette(base_hex: &str) -> Result<Vec<PaletteEntry>, ColorError> {
    let base = Hct::from_hex(base_hex)?;
    tracing::debug!(
        hue = base.hue(),
        chroma = base.chroma(),
        tone = base.tone(),
        "plugin palette base"
    );
    Ok(generate_palette(&PaletteRequest {
        base,
        sampling: ToneSampling::Fixed(PLUGIN_TONE_STEPS.to_vec()),
        chroma: ChromaShape::Constant,
    }))
}

/// A primary (tonal) and a neutral palette built from one base color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSystem {
    pub primary: Vec<PaletteEntry>,
    pub neutral: Vec<PaletteEntry>,
}

/// Build a [`ColorSystem`]. The neutral palette always includes the
/// extremes so that pure black and white are available.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is malformed.
pub fn generate_color_system(
    base_hex: &str,
    curve: CurveFunction,
    step_count: usize,
    include_extremes: bool,
) -> Result<ColorSystem, ColorError> {
    Ok(ColorSystem {
        primary: generate_tonal_palette(base_hex, curve, step_count, include_extremes)?,
        neutral: generate_neutral_palette(base_hex, curve, step_count, true)?,
    })
}

// ─── Grayscale Fallback ──────────────────────────────────────────────────────

/// A plain grayscale ramp over `tones`: `round(tone · 2.55)` per channel,
/// with 0 and 100 pinned to black and white.
#[must_use]
pub fn grayscale_palette(tones: &[u8]) -> Vec<PaletteEntry> {
    tones
        .iter()
        .map(|&tone| PaletteEntry { tone: f64::from(tone), hex: gray_hex(tone), chroma: 0.0 })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn gray_hex(tone: u8) -> String {
    match tone {
        0 => "#000000".to_owned(),
        100..=u8::MAX => "#FFFFFF".to_owned(),
        _ => {
            // Safe: tone < 100, so the level stays below 255.
            let level = (f64::from(tone) * 2.55).round() as u8;
            hex_from_argb(argb_from_rgb8(level, level, level))
        }
    }
}

/// [`generate_tonal_palette`], substituting a grayscale ramp over the same
/// tones when `base_hex` cannot be parsed.
#[must_use]
pub fn generate_tonal_palette_or_grayscale(
    base_hex: &str,
    curve: CurveFunction,
    step_count: usize,
    include_extremes: bool,
) -> Vec<PaletteEntry> {
    generate_tonal_palette(base_hex, curve, step_count, include_extremes).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to grayscale palette");
        grayscale_palette(&tone_steps(step_count, curve, include_extremes))
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
