//! Tone distribution curves.
//!
//! A curve decides *which* tones a palette samples. It never touches
//! chroma: chroma shaping lives in [`crate::chroma`] and depends only on
//! the tone being realized.
//!
//! Sampling parametrizes `t` over `[0, 1]` across the requested count.
//! With extremes excluded, `t` is first remapped into `[0.05, 0.95]` and
//! only then passed through the curve.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Canonical Material tone steps (extremes excluded).
pub const MATERIAL_TONE_STEPS: [u8; 13] = [4, 8, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99];

/// Anchor tones the `material` curve interpolates between.
pub const MATERIAL_ANCHORS: [f64; 13] =
    [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 95.0, 98.0, 100.0];

/// The fixed 15-step set written as design-tool styles.
pub const PLUGIN_TONE_STEPS: [u8; 15] = [0, 4, 8, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// Logistic steepness of the `s-shaped` curve.
const SIGMOID_STEEPNESS: f64 = 8.0;

/// Sampling window used when extremes are excluded.
const INNER_RANGE: (f64, f64) = (0.05, 0.95);

/// A named tone-distribution function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveFunction {
    /// `100·t`
    Linear,
    /// `100·sin(t·π/2)`, dense toward the light end.
    Sine,
    /// `100·(1 − cos(t·π/2))`, dense toward the dark end.
    Cosine,
    /// `100·t²`
    Quadratic,
    /// Piecewise-linear over [`MATERIAL_ANCHORS`].
    #[default]
    Material,
    /// Normalized logistic sigmoid centered at `t = 0.5`.
    SShaped,
}

impl CurveFunction {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sine => "sine",
            Self::Cosine => "cosine",
            Self::Quadratic => "quadratic",
            Self::Material => "material",
            Self::SShaped => "s-shaped",
        }
    }

    /// Parse a curve from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|c| c.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Linear,
            Self::Sine,
            Self::Cosine,
            Self::Quadratic,
            Self::Material,
            Self::SShaped,
        ]
    }

    /// Evaluate the curve at `t ∈ [0, 1]`, producing a tone in [0, 100].
    ///
    /// `count` is the total number of samples; `material` degrades to
    /// linear when it is 3 or less.
    #[must_use]
    pub fn sample(self, t: f64, count: usize) -> f64 {
        match self {
            Self::Linear => 100.0 * t,
            Self::Sine => 100.0 * (t * PI / 2.0).sin(),
            Self::Cosine => 100.0 * (1.0 - (t * PI / 2.0).cos()),
            Self::Quadratic => 100.0 * (t * t),
            Self::SShaped => {
                let lo = sigmoid(0.0);
                let hi = sigmoid(1.0);
                100.0 * ((sigmoid(t) - lo) / (hi - lo))
            }
            Self::Material if count <= 3 => 100.0 * t,
            Self::Material => material(t),
        }
    }
}

impl fmt::Display for CurveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFunction {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownCurve(s.to_owned()))
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-SIGMOID_STEEPNESS * (x - 0.5)).exp())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn material(t: f64) -> f64 {
    let last = MATERIAL_ANCHORS.len() - 1;
    let scaled = t * last as f64;
    // Truncation is the floor here: t is never negative.
    let index = scaled.floor() as usize;
    if index < last {
        let remainder = scaled - index as f64;
        MATERIAL_ANCHORS[index] + remainder * (MATERIAL_ANCHORS[index + 1] - MATERIAL_ANCHORS[index])
    } else {
        MATERIAL_ANCHORS[last]
    }
}

// ─── Tone Steps ──────────────────────────────────────────────────────────────

/// Generate `count` integer tones distributed by `curve`.
///
/// Every value is rounded and clamped to [0, 100]. Without
/// `include_extremes` a leading 0 becomes 5 and a trailing 100 becomes 95,
/// whatever the count. With it, three or more steps are pinned to 0 and
/// 100 at the ends. A single step samples the start of the curve.
#[must_use]
pub fn tone_steps(count: usize, curve: CurveFunction, include_extremes: bool) -> Vec<u8> {
    if curve == CurveFunction::Material
        && count == MATERIAL_TONE_STEPS.len()
        && !include_extremes
    {
        return MATERIAL_TONE_STEPS.to_vec();
    }

    let (start, end) = if include_extremes { (0.0, 1.0) } else { INNER_RANGE };
    let denominator = count.saturating_sub(1).max(1) as f64;

    let mut steps: Vec<u8> = (0..count)
        .map(|i| {
            let t = start + (i as f64 / denominator) * (end - start);
            to_tone(curve.sample(t, count))
        })
        .collect();

    let Some(last) = count.checked_sub(1) else {
        return steps;
    };
    if !include_extremes {
        if steps[0] == 0 {
            steps[0] = 5;
        }
        if steps[last] == 100 {
            steps[last] = 95;
        }
    } else if count >= 3 {
        steps[0] = 0;
        steps[last] = 100;
    }

    steps
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_tone(value: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 100.0 before truncation.
    value.clamp(0.0, 100.0).round() as u8
}

// ─── Single-Value Curves ─────────────────────────────────────────────────────

/// The HCT coordinate a value passed to [`apply_curve_function`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveProperty {
    Hue,
    #[default]
    Chroma,
    Tone,
}

/// Reshape a single magnitude in `[0, max]` with `curve`.
///
/// Hue always passes through unchanged. `linear`, `material` and
/// `s-shaped` are identities here; the others map `value / max` through
/// their curve and scale back by `max`.
#[must_use]
pub fn apply_curve_function(value: f64, max: f64, curve: CurveFunction, property: CurveProperty) -> f64 {
    if property == CurveProperty::Hue {
        return value;
    }

    let normalized = value / max;
    match curve {
        CurveFunction::Sine => max * (normalized * PI / 2.0).sin(),
        CurveFunction::Cosine => max * (1.0 - (normalized * PI / 2.0).cos()),
        CurveFunction::Quadratic => max * normalized.powi(2),
        CurveFunction::Linear | CurveFunction::Material | CurveFunction::SShaped => value,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
