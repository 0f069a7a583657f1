//! Functional (semantic) palettes: negative, positive, informational and
//! warning ramps.
//!
//! Each role has a fixed base color that only contributes its hue. Tone
//! and chroma are interpolated linearly across the ranges of the chosen
//! [`FunctionalPaletteType`]; there is no bell or V shaping here.
//!
//! | Type   | Tone     | Chroma   |
//! |--------|----------|----------|
//! | pastel | 85 – 98  | 10 – 28  |
//! | bright | 70 – 95  | 40 – 80  |
//! | vivid  | 55 – 85  | 60 – 90  |
//! | muted  | 40 – 80  | 10 – 28  |
//! | deep   | 20 – 60  | 40 – 80  |

use std::fmt;
use std::str::FromStr;

use hct_color::Hct;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::PaletteError;
use crate::palette::PaletteEntry;

// ─── Roles ───────────────────────────────────────────────────────────────────

/// A semantic role, in the fixed order palettes emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionalRole {
    Negative,
    Positive,
    Informational,
    Warning,
}

impl FunctionalRole {
    pub const ALL: [Self; 4] = [Self::Negative, Self::Positive, Self::Informational, Self::Warning];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Informational => "informational",
            Self::Warning => "warning",
        }
    }

    /// The role's base color as ARGB.
    #[must_use]
    pub const fn base_argb(self) -> u32 {
        match self {
            Self::Negative => 0xffd3_2f2f,
            Self::Positive => 0xff38_8e3c,
            Self::Informational => 0xff19_76d2,
            Self::Warning => 0xffff_a000,
        }
    }
}

impl fmt::Display for FunctionalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Palette Types ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionalPaletteType {
    #[default]
    Pastel,
    Bright,
    Vivid,
    Muted,
    Deep,
}

impl FunctionalPaletteType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Bright => "bright",
            Self::Vivid => "vivid",
            Self::Muted => "muted",
            Self::Deep => "deep",
        }
    }

    /// Parse a palette type from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|t| t.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pastel, Self::Bright, Self::Vivid, Self::Muted, Self::Deep]
    }

    /// Inclusive tone range.
    #[must_use]
    pub const fn tone_range(self) -> (f64, f64) {
        match self {
            Self::Pastel => (85.0, 98.0),
            Self::Bright => (70.0, 95.0),
            Self::Vivid => (55.0, 85.0),
            Self::Muted => (40.0, 80.0),
            Self::Deep => (20.0, 60.0),
        }
    }

    /// Inclusive chroma range.
    #[must_use]
    pub const fn chroma_range(self) -> (f64, f64) {
        match self {
            Self::Pastel | Self::Muted => (10.0, 28.0),
            Self::Bright | Self::Deep => (40.0, 80.0),
            Self::Vivid => (60.0, 90.0),
        }
    }
}

impl fmt::Display for FunctionalPaletteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionalPaletteType {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownPaletteType(s.to_owned()))
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// One ramp per role, in [`FunctionalRole::ALL`] order.
///
/// Serializes as a map from role name to entries, preserving that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalPalette {
    pub kind: FunctionalPaletteType,
    pub ramps: Vec<(FunctionalRole, Vec<PaletteEntry>)>,
}

impl FunctionalPalette {
    #[must_use]
    pub fn ramp(&self, role: FunctionalRole) -> Option<&[PaletteEntry]> {
        self.ramps.iter().find(|(r, _)| *r == role).map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for FunctionalPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ramps.len()))?;
        for (role, entries) in &self.ramps {
            map.serialize_entry(role.name(), entries)?;
        }
        map.end()
    }
}

/// Generate `steps` entries per role for `kind`.
///
/// Entries report tone and chroma rounded to integers. A single step sits
/// at the start of both ranges; zero steps yields empty ramps.
#[must_use]
pub fn generate_functional_palette(kind: FunctionalPaletteType, steps: usize) -> FunctionalPalette {
    let (tone_lo, tone_hi) = kind.tone_range();
    let (chroma_lo, chroma_hi) = kind.chroma_range();
    let denominator = steps.saturating_sub(1).max(1) as f64;

    let ramps = FunctionalRole::ALL
        .iter()
        .map(|&role| {
            let hue = Hct::from_int(role.base_argb()).hue();
            let entries = (0..steps)
                .map(|i| {
                    let i = i as f64;
                    let tone = tone_lo + i * (tone_hi - tone_lo) / denominator;
                    let chroma = chroma_lo + i * (chroma_hi - chroma_lo) / denominator;
                    let color = Hct::new(hue, chroma, tone);
                    PaletteEntry { tone: tone.round(), hex: color.to_hex(), chroma: chroma.round() }
                })
                .collect();
            (role, entries)
        })
        .collect();

    tracing::debug!(kind = %kind, steps, "generated functional palette");
    FunctionalPalette { kind, ramps }
}

// ─── Static Scales ───────────────────────────────────────────────────────────

/// Style of the hand-picked functional scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionalScaleStyle {
    Pastel,
    Bright,
}

impl FunctionalScaleStyle {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Bright => "bright",
        }
    }

    /// The fixed five-color ramp for each role.
    #[must_use]
    pub const fn scale(self) -> &'static FunctionalScale {
        match self {
            Self::Pastel => &PASTEL_SCALE,
            Self::Bright => &BRIGHT_SCALE,
        }
    }
}

impl FromStr for FunctionalScaleStyle {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pastel" => Ok(Self::Pastel),
            "bright" => Ok(Self::Bright),
            _ => Err(PaletteError::UnknownScaleStyle(s.to_owned())),
        }
    }
}

/// Five hand-picked colors per role, lightest first.
pub type FunctionalScale = [(FunctionalRole, [&'static str; 5]); 4];

const PASTEL_SCALE: FunctionalScale = [
    (FunctionalRole::Negative, ["#FFE5E5", "#FFB8B8", "#FF7A7A", "#FF3B3B", "#D32F2F"]),
    (FunctionalRole::Positive, ["#E6F9E6", "#B8F2B8", "#7AE87A", "#3BD43B", "#388E3C"]),
    (FunctionalRole::Informational, ["#E5F0FF", "#B8D4FF", "#7AB8FF", "#3B9CFF", "#1976D2"]),
    (FunctionalRole::Warning, ["#FFF7E5", "#FFE0B8", "#FFD27A", "#FFB83B", "#FFA000"]),
];

const BRIGHT_SCALE: FunctionalScale = [
    (FunctionalRole::Negative, ["#FFEBEE", "#FF5252", "#FF1744", "#D50000", "#B71C1C"]),
    (FunctionalRole::Positive, ["#E8F5E9", "#69F0AE", "#00E676", "#00C853", "#1B5E20"]),
    (FunctionalRole::Informational, ["#E3F2FD", "#40C4FF", "#0091EA", "#2962FF", "#0D47A1"]),
    (FunctionalRole::Warning, ["#FFFDE7", "#FFD600", "#FFAB00", "#FF6F00", "#FF3D00"]),
];

/// Hand-picked functional ramps, not generated from HCT.
pub const FUNCTIONAL_COLOR_SCALES: [(FunctionalScaleStyle, FunctionalScale); 2] = [
    (FunctionalScaleStyle::Pastel, PASTEL_SCALE),
    (FunctionalScaleStyle::Bright, BRIGHT_SCALE),
];

// ─── Tests ───────────────────────────────────────────────────────────────────
