// SPDX-License-Identifier: MIT
//
// Design-tool style export.
//
// A palette becomes a flat sheet of named paint styles:
//
//   HCT/T{tone}                  solid paint
//   HCT/T{tone}/Alpha {pct}%     same color at each alpha step
//
// Styles already in the sheet are updated in place and counted
// separately from newly created ones. The work runs through a
// `StyleQueue`, which processes entries in batches, reports a progress
// percentage before every batch, and checks a shared cancellation token
// between batches.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use hct_color::{argb_from_hex, rgb8_from_argb};
use hct_palette::{PaletteEntry, generate_alpha_variants};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};
use crate::swatch::format_tone;

/// Namespace every exported style lives under.
pub const NAMESPACE: &str = "HCT";

/// Entries processed per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1;

// ─── Style Sheet ─────────────────────────────────────────────────────────────

/// A solid paint with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    #[must_use]
    pub fn from_rgb8((r, g, b): (u8, u8, u8), opacity: Option<f64>) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            opacity,
        }
    }
}

/// Named paint styles, serialized as a JSON object keyed by style name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    pub styles: BTreeMap<String, Paint>,
}

impl StyleSheet {
    /// Read a sheet previously written by [`StyleSheet::save`].
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadFile`] or [`CliError::StyleSheet`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text)
            .map_err(|source| CliError::StyleSheet { path: path.to_path_buf(), source })
    }

    /// # Errors
    ///
    /// Returns [`CliError::Json`] or [`CliError::Io`].
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text)?;
        Ok(())
    }

    /// Insert or replace `name`, returning `true` if it was new.
    pub fn upsert(&mut self, name: String, paint: Paint) -> bool {
        self.styles.insert(name, paint).is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

// ─── Style Names ─────────────────────────────────────────────────────────────

/// A parsed style name under [`NAMESPACE`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleName {
    pub tone: f64,
    pub alpha_percent: Option<u8>,
}

impl StyleName {
    #[must_use]
    pub fn solid(tone: f64) -> String {
        format!("{NAMESPACE}/T{}", format_tone(tone))
    }

    #[must_use]
    pub fn alpha(tone: f64, percent: u8) -> String {
        format!("{NAMESPACE}/T{}/Alpha {percent}%", format_tone(tone))
    }
}

/// Recognizes names produced by [`StyleName::solid`] and [`StyleName::alpha`].
#[derive(Debug, Clone)]
pub struct StyleNameParser {
    pattern: Regex,
}

impl StyleNameParser {
    /// # Errors
    ///
    /// Returns [`CliError::Pattern`] if the name pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"^{NAMESPACE}/T(\d+(?:\.\d+)?)(?:/Alpha (\d{{1,3}})%)?$"
        ))?;
        Ok(Self { pattern })
    }

    /// `None` for names outside the namespace or not in either shape.
    #[must_use]
    pub fn parse(&self, name: &str) -> Option<StyleName> {
        let caps = self.pattern.captures(name)?;
        let tone = caps.get(1)?.as_str().parse().ok()?;
        let alpha_percent = match caps.get(2) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        Some(StyleName { tone, alpha_percent })
    }
}

// ─── Queue ───────────────────────────────────────────────────────────────────

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    pub created: usize,
    pub updated: usize,
    /// Entries dropped because their color could not be parsed.
    pub skipped: usize,
    /// Managed styles in the sheet that this run did not touch.
    pub stale: usize,
}

/// Batched, cancellable conversion of palette entries into styles.
pub struct StyleQueue<'a> {
    entries: &'a [PaletteEntry],
    include_alpha: bool,
    batch_size: usize,
    cancel: CancelToken,
    progress: Option<Box<dyn FnMut(u8) + 'a>>,
}

impl<'a> StyleQueue<'a> {
    #[must_use]
    pub fn new(entries: &'a [PaletteEntry], include_alpha: bool) -> Self {
        Self {
            entries,
            include_alpha,
            batch_size: DEFAULT_BATCH_SIZE,
            cancel: CancelToken::default(),
            progress: None,
        }
    }

    /// Zero is treated as one.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Called with a percentage in `0..=100` before each batch and once
    /// after the last.
    #[must_use]
    pub fn on_progress(mut self, f: impl FnMut(u8) + 'a) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Write every entry into `sheet`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Cancelled`] if the token is set between batches.
    /// Batches that completed before cancellation stay in `sheet`.
    pub fn run(mut self, sheet: &mut StyleSheet, names: &StyleNameParser) -> Result<StyleReport> {
        let total = self.entries.len();
        let mut report = StyleReport::default();
        let mut touched = BTreeSet::new();
        let mut index = 0;

        loop {
            self.report_progress(index, total);
            if index >= total {
                break;
            }
            if self.cancel.is_cancelled() {
                tracing::warn!(processed = index, total, "style export cancelled");
                return Err(CliError::Cancelled { processed: index, total });
            }

            let end = (index + self.batch_size).min(total);
            for (i, entry) in self.entries[index..end].iter().enumerate() {
                self.write_entry(index + i, entry, sheet, &mut report, &mut touched);
            }
            index = end;
        }

        for name in sheet.styles.keys().filter(|name| !touched.contains(name.as_str())) {
            if let Some(parsed) = names.parse(name) {
                tracing::debug!(tone = parsed.tone, alpha = ?parsed.alpha_percent, "stale style");
                report.stale += 1;
            }
        }
        tracing::debug!(?report, "style export finished");
        Ok(report)
    }

    fn write_entry(
        &self,
        index: usize,
        entry: &PaletteEntry,
        sheet: &mut StyleSheet,
        report: &mut StyleReport,
        touched: &mut BTreeSet<String>,
    ) {
        let parsed = argb_from_hex(&entry.hex).and_then(|argb| {
            let variants =
                if self.include_alpha { generate_alpha_variants(&entry.hex)? } else { Vec::new() };
            Ok((rgb8_from_argb(argb), variants))
        });
        let (rgb, variants) = match parsed {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping invalid palette entry");
                report.skipped += 1;
                return;
            }
        };
        tracing::trace!(tone = entry.tone, hex = %entry.hex, "writing style");

        let mut put = |name: String, paint: Paint| {
            if sheet.upsert(name.clone(), paint) {
                report.created += 1;
            } else {
                report.updated += 1;
            }
            touched.insert(name);
        };

        put(StyleName::solid(entry.tone), Paint::from_rgb8(rgb, None));

        for variant in variants {
            put(
                StyleName::alpha(entry.tone, variant.percent()),
                Paint::from_rgb8(variant.rgb, Some(variant.alpha)),
            );
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn report_progress(&mut self, index: usize, total: usize) {
        let Some(progress) = self.progress.as_mut() else {
            return;
        };
        let percent = if total == 0 { 100 } else { (index as f64 / total as f64 * 100.0).round() as u8 };
        progress(percent);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn entry(tone: f64, hex: &str) -> PaletteEntry {
        PaletteEntry { tone, hex: hex.to_owned(), chroma: 0.0 }
    }

    fn palette() -> Vec<PaletteEntry> {
        vec![entry(0.0, "#000000"), entry(50.0, "#007AD1"), entry(100.0, "#FFFFFF")]
    }

    fn names() -> StyleNameParser {
        StyleNameParser::new().unwrap()
    }

    #[test]
    fn solid_styles() {
        let entries = palette();
        let mut sheet = StyleSheet::default();
        let report = StyleQueue::new(&entries, false).run(&mut sheet, &names()).unwrap();

        assert_eq!(report, StyleReport { created: 3, updated: 0, skipped: 0, stale: 0 });
        let keys: Vec<&str> = sheet.styles.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["HCT/T0", "HCT/T100", "HCT/T50"]);

        let blue = sheet.styles.get("HCT/T50").unwrap();
        assert!((blue.r - 0.0).abs() < 1e-12);
        assert!((blue.g - 122.0 / 255.0).abs() < 1e-12);
        assert!((blue.b - 209.0 / 255.0).abs() < 1e-12);
        assert_eq!(blue.opacity, None);
    }

    #[test]
    fn alpha_styles() {
        let entries = [entry(50.0, "#007AD1")];
        let mut sheet = StyleSheet::default();
        let report = StyleQueue::new(&entries, true).run(&mut sheet, &names()).unwrap();

        assert_eq!(report.created, 7);
        let keys: Vec<&str> = sheet.styles.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "HCT/T50",
                "HCT/T50/Alpha 10%",
                "HCT/T50/Alpha 20%",
                "HCT/T50/Alpha 40%",
                "HCT/T50/Alpha 5%",
                "HCT/T50/Alpha 60%",
                "HCT/T50/Alpha 80%",
            ]
        );
        assert_eq!(sheet.styles.get("HCT/T50/Alpha 5%").unwrap().opacity, Some(0.05));
    }

    #[test]
    fn rerun_updates_existing() {
        let entries = palette();
        let mut sheet = StyleSheet::default();
        StyleQueue::new(&entries, false).run(&mut sheet, &names()).unwrap();
        let report = StyleQueue::new(&entries, false).run(&mut sheet, &names()).unwrap();
        assert_eq!(report, StyleReport { created: 0, updated: 3, skipped: 0, stale: 0 });
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn untouched_managed_styles_are_stale() {
        let mut sheet = StyleSheet::default();
        sheet.upsert("HCT/T40".to_owned(), Paint::from_rgb8((1, 2, 3), None));
        sheet.upsert("Brand/Primary".to_owned(), Paint::from_rgb8((1, 2, 3), None));
        let entries = [entry(50.0, "#007AD1")];
        let report = StyleQueue::new(&entries, false).run(&mut sheet, &names()).unwrap();
        assert_eq!(report.stale, 1);
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let entries = [entry(10.0, "#12"), entry(20.0, "#333333")];
        let mut sheet = StyleSheet::default();
        let report = StyleQueue::new(&entries, true).run(&mut sheet, &names()).unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.created, 7);
        assert!(sheet.styles.get("HCT/T10").is_none());
    }

    #[test]
    fn invalid_entry_writes_no_alpha_styles() {
        let entries = [entry(10.0, "not-a-color")];
        let mut sheet = StyleSheet::default();
        let report = StyleQueue::new(&entries, true).run(&mut sheet, &names()).unwrap();
        assert_eq!(report, StyleReport { created: 0, updated: 0, skipped: 1, stale: 0 });
        assert!(sheet.is_empty());
    }

    #[test]
    fn repeated_tones_count_once_for_staleness() {
        let entries = [entry(50.0, "#007AD1"), entry(50.0, "#007AD1"), entry(60.0, "#2A8EE6")];
        let mut sheet = StyleSheet::default();
        sheet.upsert("HCT/T40".to_owned(), Paint::from_rgb8((1, 2, 3), None));
        let report = StyleQueue::new(&entries, true).run(&mut sheet, &names()).unwrap();
        assert_eq!(report, StyleReport { created: 14, updated: 7, skipped: 0, stale: 1 });
        assert_eq!(sheet.len(), 15);
    }

    #[test]
    fn progress_per_batch() {
        let entries = palette();
        let seen = RefCell::new(Vec::new());
        let mut sheet = StyleSheet::default();
        StyleQueue::new(&entries, false)
            .on_progress(|p| seen.borrow_mut().push(p))
            .run(&mut sheet, &names())
            .unwrap();
        assert_eq!(*seen.borrow(), vec![0, 33, 67, 100]);

        seen.borrow_mut().clear();
        StyleQueue::new(&entries, false)
            .with_batch_size(2)
            .on_progress(|p| seen.borrow_mut().push(p))
            .run(&mut sheet, &names())
            .unwrap();
        assert_eq!(*seen.borrow(), vec![0, 67, 100]);
    }

    #[test]
    fn empty_palette_reports_done() {
        let seen = RefCell::new(Vec::new());
        let report = StyleQueue::new(&[], true)
            .on_progress(|p| seen.borrow_mut().push(p))
            .run(&mut StyleSheet::default(), &names())
            .unwrap();
        assert_eq!(report, StyleReport::default());
        assert_eq!(*seen.borrow(), vec![100]);
    }

    #[test]
    fn cancel_between_batches() {
        let entries = palette();
        let token = CancelToken::default();
        let trigger = token.clone();
        let mut sheet = StyleSheet::default();
        let err = StyleQueue::new(&entries, false)
            .with_cancel_token(token)
            .on_progress(move |p| {
                if p > 0 {
                    trigger.cancel();
                }
            })
            .run(&mut sheet, &names())
            .unwrap_err();

        assert!(matches!(err, CliError::Cancelled { processed: 1, total: 3 }));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn parses_managed_names() {
        let names = names();
        assert_eq!(names.parse("HCT/T50"), Some(StyleName { tone: 50.0, alpha_percent: None }));
        assert_eq!(
            names.parse("HCT/T70.71/Alpha 5%"),
            Some(StyleName { tone: 70.71, alpha_percent: Some(5) })
        );
        assert_eq!(names.parse("HCT/T50/Alpha"), None);
        assert_eq!(names.parse("Brand/T50"), None);
        assert_eq!(names.parse(&StyleName::alpha(40.0, 80)).map(|n| n.alpha_percent), Some(Some(80)));
    }

    #[test]
    fn sheet_json_shape() {
        let mut sheet = StyleSheet::default();
        sheet.upsert("HCT/T0".to_owned(), Paint::from_rgb8((0, 0, 0), None));
        sheet.upsert("HCT/T0/Alpha 5%".to_owned(), Paint::from_rgb8((255, 255, 255), Some(0.05)));
        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(
            json,
            r#"{"HCT/T0":{"r":0.0,"g":0.0,"b":0.0},"HCT/T0/Alpha 5%":{"r":1.0,"g":1.0,"b":1.0,"opacity":0.05}}"#
        );
        let back: StyleSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
