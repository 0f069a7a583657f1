// SPDX-License-Identifier: MIT
//
// hct-gen — HCT color palettes from the command line.
//
// Wires the two library crates to a CLI:
//
//   hct-color   → hex parsing, LCH transforms, gamut solver, Hct
//   hct-palette → tone curves, palettes, contrast, alpha variants
//
// Each invocation flows through the same stages:
//
//   args ──► Settings (defaults → --config → flags)
//            │
//            ▼
//   subcommand ──► hct-palette ──► Report ──► table / json / swatch
//
// `styles` additionally routes the palette through the batched
// StyleQueue and writes a paint-style sheet.

mod cli;
mod config;
mod error;
mod output;
mod styles;
mod swatch;

use std::io::{self, Write};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use hct_color::Hct;
use hct_palette::{
    PLUGIN_TONE_STEPS, approximate_tonal_palette, best_text_color, contrast_ratio_hex,
    find_nearest_tone_index, generate_alpha_variants, generate_color_system,
    generate_functional_palette, generate_neutral_palette, generate_plugin_palette,
    generate_tonal_palette,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, PaletteArgs, PaletteKinds};
use crate::config::Settings;
use crate::error::Result;
use crate::output::{
    AlphaReport, CompareReport, HctReport, NearestReport, PaletteReport, ScaleReport,
    TextColorReport, emit,
};
use crate::styles::{CancelToken, StyleNameParser, StyleQueue, StyleSheet};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve(settings: &Settings, args: &PaletteArgs) -> Settings {
    let mut resolved = settings.clone();
    resolved.apply(args.overrides());
    resolved
}

#[allow(clippy::too_many_lines)]
fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Command::Hct { color } => {
            emit(out, format, &HctReport::from(Hct::from_hex(color.as_str())?))?;
        }

        Command::Tonal(args) => {
            let s = resolve(&settings, &args);
            let entries =
                generate_tonal_palette(s.base_color.as_str(), s.curve, s.step_count, s.include_extremes)?;
            emit(out, format, &PaletteReport::single("tonal", entries))?;
        }

        Command::Neutral(args) => {
            let s = resolve(&settings, &args);
            let extremes = args.include_extremes.unwrap_or(s.neutral_include_extremes);
            let entries =
                generate_neutral_palette(s.base_color.as_str(), s.curve, s.step_count, extremes)?;
            emit(out, format, &PaletteReport::single("neutral", entries))?;
        }

        Command::System { palette, only } => {
            let s = resolve(&settings, &palette);
            let kinds = PaletteKinds::select(&only);
            let base = s.base_color.as_str();
            let mut report = PaletteReport::default();

            if kinds.intersects(PaletteKinds::PRIMARY | PaletteKinds::NEUTRAL) {
                let system = generate_color_system(base, s.curve, s.step_count, s.include_extremes)?;
                if kinds.contains(PaletteKinds::PRIMARY) {
                    report.push("primary", system.primary);
                }
                if kinds.contains(PaletteKinds::NEUTRAL) {
                    report.push("neutral", system.neutral);
                }
            }
            if kinds.contains(PaletteKinds::FUNCTIONAL) {
                let functional = generate_functional_palette(s.functional_type, s.functional_steps);
                for (role, entries) in functional.ramps {
                    report.push(role.name(), entries);
                }
            }
            emit(out, format, &report)?;
        }

        Command::Plugin { base } => {
            let base = base.unwrap_or(settings.base_color);
            emit(out, format, &PaletteReport::single("plugin", generate_plugin_palette(base.as_str())?))?;
        }

        Command::Functional { kind, steps } => {
            let kind = kind.unwrap_or(settings.functional_type);
            let steps = steps.unwrap_or(settings.functional_steps);
            emit(out, format, &generate_functional_palette(kind, steps))?;
        }

        Command::Scales { style } => emit(out, format, &ScaleReport(style.scale()))?,

        Command::Alpha { color } => {
            let variants = generate_alpha_variants(color.as_str())?;
            emit(out, format, &AlphaReport { color: color.to_string(), variants })?;
        }

        Command::TextColor { color } => {
            let text = best_text_color(color.as_str())?;
            let contrast = contrast_ratio_hex(color.as_str(), text)?;
            emit(out, format, &TextColorReport { background: color.to_string(), text, contrast })?;
        }

        Command::Nearest { tone, steps } => {
            let index = find_nearest_tone_index(tone, &steps);
            let step = index.map(|i| steps[i]);
            emit(out, format, &NearestReport { tone, index, step })?;
        }

        Command::Compare { color } => {
            let base = color.unwrap_or(settings.base_color);
            let report = CompareReport {
                hct: generate_plugin_palette(base.as_str())?,
                approximated: approximate_tonal_palette(base.as_str(), &PLUGIN_TONE_STEPS)?,
            };
            emit(out, format, &report)?;
        }

        Command::Styles { base, alpha, existing, batch_size, timeout } => {
            let base = base.unwrap_or(settings.base_color);
            let entries = generate_plugin_palette(base.as_str())?;
            let mut sheet = match &existing {
                Some(path) if path.exists() => StyleSheet::load(path)?,
                _ => StyleSheet::default(),
            };
            if !sheet.is_empty() {
                tracing::debug!(styles = sheet.len(), "updating existing style sheet");
            }

            let cancel = CancelToken::default();
            let watcher = cancel.clone();
            let deadline = timeout.map(|secs| Instant::now() + Duration::from_secs(secs));
            let report = StyleQueue::new(&entries, alpha)
                .with_batch_size(batch_size)
                .with_cancel_token(cancel)
                .on_progress(move |percent| {
                    tracing::debug!(percent, "creating color styles");
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        watcher.cancel();
                    }
                })
                .run(&mut sheet, &StyleNameParser::new()?)?;

            match existing {
                Some(path) => {
                    sheet.save(&path)?;
                    emit(out, format, &report)?;
                }
                None => {
                    serde_json::to_writer_pretty(&mut *out, &sheet)?;
                    writeln!(out)?;
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(cli, &mut stdout) {
        eprintln!("hct-gen: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
