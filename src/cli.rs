// SPDX-License-Identifier: MIT
//
// Command-line surface of `hct-gen`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hct_palette::{CurveFunction, FunctionalPaletteType, FunctionalScaleStyle};

use crate::config::{HexColor, Overrides};

#[derive(Debug, Parser)]
#[command(name = "hct-gen", version, about = "Generate HCT color palettes")]
pub struct Cli {
    /// TOML config file with palette defaults.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log palette generation at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    /// 24-bit color blocks.
    Swatch,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hue, chroma and tone of a color.
    Hct { color: HexColor },

    /// Tonal palette of the base color.
    Tonal(PaletteArgs),

    /// Low-chroma palette sharing the base hue.
    Neutral(PaletteArgs),

    /// Several palettes from one base color.
    System {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Palettes to include. Defaults to primary and neutral.
        #[arg(long, value_enum, value_delimiter = ',')]
        only: Vec<PaletteKind>,
    },

    /// The 15 fixed design-tool tones at the base chroma.
    Plugin {
        #[arg(long)]
        base: Option<HexColor>,
    },

    /// Semantic ramps (negative, positive, informational, warning).
    Functional {
        /// pastel, bright, vivid, muted or deep.
        kind: Option<FunctionalPaletteType>,

        #[arg(long)]
        steps: Option<usize>,
    },

    /// Hand-picked functional scales.
    Scales { style: FunctionalScaleStyle },

    /// Translucent variants of a color.
    Alpha { color: HexColor },

    /// Black or white, whichever reads better on a color.
    TextColor { color: HexColor },

    /// Index of the step closest to a tone.
    Nearest {
        tone: f64,
        #[arg(required = true, num_args = 1..)]
        steps: Vec<f64>,
    },

    /// Engine palette next to the quick preview approximation.
    Compare { color: Option<HexColor> },

    /// Export the design-tool palette as paint styles.
    Styles {
        #[arg(long)]
        base: Option<HexColor>,

        /// Also create alpha variants of every tone.
        #[arg(long)]
        alpha: bool,

        /// Style sheet JSON to update in place.
        #[arg(long, value_name = "FILE")]
        existing: Option<PathBuf>,

        /// Entries per batch.
        #[arg(long, default_value_t = crate::styles::DEFAULT_BATCH_SIZE)]
        batch_size: usize,

        /// Abandon the export after this many seconds.
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
}

/// Flags shared by every palette-producing command.
#[derive(Debug, Clone, Default, Args)]
pub struct PaletteArgs {
    #[arg(long)]
    pub base: Option<HexColor>,

    #[arg(long)]
    pub curve: Option<CurveFunction>,

    #[arg(long)]
    pub steps: Option<usize>,

    /// Sample tones 0 and 100 too.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub include_extremes: Option<bool>,
}

impl PaletteArgs {
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_color: self.base.clone(),
            curve: self.curve,
            step_count: self.steps,
            include_extremes: self.include_extremes,
        }
    }
}

// ─── Palette Selection ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteKind {
    Primary,
    Neutral,
    Functional,
}

bitflags::bitflags! {
    /// Palettes a `system` run builds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct PaletteKinds: u8 {
        const PRIMARY    = 1 << 0;
        const NEUTRAL    = 1 << 1;
        const FUNCTIONAL = 1 << 2;
    }
}

impl From<PaletteKind> for PaletteKinds {
    fn from(kind: PaletteKind) -> Self {
        match kind {
            PaletteKind::Primary => Self::PRIMARY,
            PaletteKind::Neutral => Self::NEUTRAL,
            PaletteKind::Functional => Self::FUNCTIONAL,
        }
    }
}

impl PaletteKinds {
    /// Union of `kinds`, or primary + neutral when empty.
    #[must_use]
    pub fn select(kinds: &[PaletteKind]) -> Self {
        if kinds.is_empty() {
            return Self::PRIMARY | Self::NEUTRAL;
        }
        kinds.iter().fold(Self::empty(), |acc, &k| acc | Self::from(k))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
