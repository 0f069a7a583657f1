//! # hct-palette — tonal, neutral and functional palettes over HCT
//!
//! Sweeps a base color across tones and realizes each one through the
//! `hct-color` gamut solver. Tone selection, chroma shaping and color
//! realization are independent stages, so swapping a curve never changes
//! the chroma of a tone both palettes share.
//!
//! # Architecture
//!
//! ```text
//! base hex + CurveFunction + step count + include_extremes
//!     │
//!     ▼
//! curve.rs:      tone_steps (which tones to sample)
//!     │
//!     ▼
//! chroma.rs:     ChromaShape (bell / neutral V / constant per tone)
//!     │
//!     ▼
//! palette.rs:    Hct::new per tone → PaletteEntry
//!     │
//!     ├──► functional.rs: fixed-role ramps over linear ranges
//!     ├──► alpha.rs:      translucent variants of each entry
//!     ├──► nearest.rs:    tone lookups over generated steps
//!     └──► contrast.rs:   WCAG text color per entry
//! ```
//!
//! `preview.rs` holds the engine-free approximation used for comparison.

// Loop indices and step counts are small integers cast to f64.
#![allow(clippy::cast_precision_loss)]
// Plain arithmetic keeps results bit-identical to the reference palettes.
#![allow(clippy::suboptimal_flops)]
// Hue/chroma/tone variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod alpha;
pub mod chroma;
pub mod contrast;
pub mod curve;
pub mod error;
pub mod functional;
pub mod nearest;
pub mod palette;
pub mod preview;

pub use alpha::{ALPHA_STEPS, AlphaVariant, generate_alpha_variants};
pub use chroma::ChromaShape;
pub use contrast::{best_text_color, contrast_ratio, contrast_ratio_hex, passes_wcag_aa};
pub use curve::{
    CurveFunction, CurveProperty, MATERIAL_TONE_STEPS, PLUGIN_TONE_STEPS, apply_curve_function,
    tone_steps,
};
pub use error::PaletteError;
pub use functional::{
    FUNCTIONAL_COLOR_SCALES, FunctionalPalette, FunctionalPaletteType, FunctionalRole,
    FunctionalScale, FunctionalScaleStyle, generate_functional_palette,
};
pub use nearest::{find_nearest_tone, find_nearest_tone_index, find_tone_by_value};
pub use palette::{
    ColorSystem, PaletteEntry, PaletteRequest, ToneSampling, generate_color_system,
    generate_neutral_palette, generate_palette, generate_plugin_palette, generate_tonal_palette,
    generate_tonal_palette_or_grayscale, grayscale_palette,
};
pub use preview::{PreviewEntry, approximate_tonal_palette};
