//! Chroma shaping: how colorful each tone of a palette is.
//!
//! Shaping is a function of the realized tone alone, never of the tone
//! curve, so two palettes that share a tone share its chroma.

use serde::{Deserialize, Serialize};

/// Center of both the bell and the V shapes.
pub const MID_TONE: f64 = 50.0;

/// Variance of the bell, in tone units squared.
pub const BELL_VARIANCE: f64 = 400.0;
/// Multiplier at the peak of the bell.
pub const BELL_PEAK: f64 = 1.0;
/// Multiplier the bell decays toward at the tone extremes.
pub const BELL_FLOOR: f64 = 0.3;

/// Neutral chroma at the mid tone.
pub const NEUTRAL_CHROMA_MIN: f64 = 2.0;
/// Neutral chroma at tones 0 and 100.
pub const NEUTRAL_CHROMA_MAX: f64 = 8.0;

/// A chroma shaping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChromaShape {
    /// Keep the base chroma at every tone.
    Constant,
    /// Gaussian bell over the base chroma, peaking at [`MID_TONE`].
    #[default]
    Bell,
    /// Fixed low-chroma V around [`MID_TONE`], ignoring the base chroma.
    Neutral,
}

impl ChromaShape {
    /// The chroma to request at `tone` for a base color of `base_chroma`.
    #[must_use]
    pub fn chroma_at(self, base_chroma: f64, tone: f64) -> f64 {
        match self {
            Self::Constant => base_chroma,
            Self::Bell => bell_chroma(base_chroma, tone),
            Self::Neutral => neutral_chroma(tone),
        }
    }
}

/// `chroma · (floor + (peak − floor) · exp(−(tone − 50)² / (2·variance)))`
#[must_use]
pub fn bell_chroma(chroma: f64, tone: f64) -> f64 {
    let exponent = -(tone - MID_TONE).powi(2) / (2.0 * BELL_VARIANCE);
    chroma * (BELL_FLOOR + (BELL_PEAK - BELL_FLOOR) * exponent.exp())
}

/// Linear V from [`NEUTRAL_CHROMA_MIN`] at tone 50 up to
/// [`NEUTRAL_CHROMA_MAX`] at tones 0 and 100.
#[must_use]
pub fn neutral_chroma(tone: f64) -> f64 {
    let distance = (tone - MID_TONE).abs() / MID_TONE;
    NEUTRAL_CHROMA_MIN + (NEUTRAL_CHROMA_MAX - NEUTRAL_CHROMA_MIN) * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn bell_peaks_at_mid_tone() {
        assert!(approx_eq(bell_chroma(55.2667, 50.0), 55.2667, 1e-9));
        assert!(approx_eq(bell_chroma(55.2667, 40.0), 50.7209, 1e-3));
        assert!(approx_eq(bell_chroma(55.2667, 60.0), 50.7209, 1e-3));
    }

    #[test]
    fn bell_decays_toward_floor() {
        assert!(approx_eq(bell_chroma(55.2667, 0.0), 18.2798, 1e-3));
        assert!(approx_eq(bell_chroma(55.2667, 100.0), 18.2798, 1e-3));
        assert!(bell_chroma(10.0, 0.0) > 10.0 * BELL_FLOOR);
    }

    #[test]
    fn bell_is_symmetric() {
        for offset in [5.0, 12.0, 30.0, 50.0] {
            let lo = bell_chroma(40.0, MID_TONE - offset);
            let hi = bell_chroma(40.0, MID_TONE + offset);
            assert!(approx_eq(lo, hi, 1e-12));
        }
    }

    #[test]
    fn neutral_v_constants() {
        assert!(approx_eq(neutral_chroma(50.0), 2.0, 1e-12));
        assert!(approx_eq(neutral_chroma(0.0), 8.0, 1e-12));
        assert!(approx_eq(neutral_chroma(100.0), 8.0, 1e-12));
        assert!(approx_eq(neutral_chroma(10.0), 6.8, 1e-12));
        assert!(approx_eq(neutral_chroma(95.0), 7.4, 1e-12));
    }

    #[test]
    fn constant_ignores_tone() {
        for tone in [0.0, 37.0, 100.0] {
            assert!(approx_eq(ChromaShape::Constant.chroma_at(42.0, tone), 42.0, 1e-12));
        }
    }

    #[test]
    fn neutral_ignores_base_chroma() {
        let a = ChromaShape::Neutral.chroma_at(0.0, 30.0);
        let b = ChromaShape::Neutral.chroma_at(120.0, 30.0);
        assert!(approx_eq(a, b, 1e-12));
    }
}
