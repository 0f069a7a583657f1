// SPDX-License-Identifier: MIT
//
// Rendering of command results.
//
// Every result is a `Report`: it serializes to JSON through serde and knows
// how to lay itself out as a plain table. Reports with colors also paint
// themselves as terminal swatches; the rest fall back to the table.

use std::io::{self, Write};

use hct_color::Hct;
use hct_palette::{
    AlphaVariant, FunctionalPalette, FunctionalScale, PaletteEntry, PreviewEntry,
};
use serde::Serialize;

use crate::cli::Format;
use crate::error::Result;
use crate::styles::StyleReport;
use crate::swatch::{self, format_tone};

pub trait Report: Serialize {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()>;

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        self.write_table(w)
    }
}

/// Render `report` to `w` in `format`.
///
/// # Errors
///
/// Returns I/O and JSON serialization failures.
pub fn emit(w: &mut dyn Write, format: Format, report: &impl Report) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, report)?;
            writeln!(w)?;
        }
        Format::Table => report.write_table(w)?,
        Format::Swatch => report.write_swatch(w)?,
    }
    Ok(())
}

fn write_entries(w: &mut dyn Write, entries: &[PaletteEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(w, "  T{:<5}  {}  C{:.2}", format_tone(entry.tone), entry.hex, entry.chroma)?;
    }
    Ok(())
}

// ─── Reports ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HctReport {
    pub hex: String,
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
}

impl From<Hct> for HctReport {
    fn from(hct: Hct) -> Self {
        Self { hex: hct.to_hex(), hue: hct.hue(), chroma: hct.chroma(), tone: hct.tone() }
    }
}

impl Report for HctReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}  H{:.2}  C{:.2}  T{:.2}", self.hex, self.hue, self.chroma, self.tone)
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        swatch::block(w, &self.hex, &self.hex)?;
        writeln!(w, "  H{:.2}  C{:.2}  T{:.2}", self.hue, self.chroma, self.tone)
    }
}

/// One or more titled palettes, in a fixed order.
#[derive(Debug, Default)]
pub struct PaletteReport {
    pub sections: Vec<(&'static str, Vec<PaletteEntry>)>,
}

impl PaletteReport {
    #[must_use]
    pub fn single(title: &'static str, entries: Vec<PaletteEntry>) -> Self {
        Self { sections: vec![(title, entries)] }
    }

    pub fn push(&mut self, title: &'static str, entries: Vec<PaletteEntry>) {
        self.sections.push((title, entries));
    }
}

impl Serialize for PaletteReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (title, entries) in &self.sections {
            map.serialize_entry(title, entries)?;
        }
        map.end()
    }
}

impl Report for PaletteReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        for (title, entries) in &self.sections {
            writeln!(w, "{title}")?;
            write_entries(w, entries)?;
        }
        Ok(())
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        for (title, entries) in &self.sections {
            swatch::write_palette(w, title, entries)?;
        }
        Ok(())
    }
}

impl Report for FunctionalPalette {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{} functional palette", self.kind)?;
        for (role, entries) in &self.ramps {
            writeln!(w, "{role}")?;
            write_entries(w, entries)?;
        }
        Ok(())
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        for (role, entries) in &self.ramps {
            swatch::write_palette(w, role.name(), entries)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ScaleReport(pub &'static FunctionalScale);

impl Serialize for ScaleReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (role, colors) in self.0 {
            map.serialize_entry(role.name(), colors)?;
        }
        map.end()
    }
}

impl Report for ScaleReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        for (role, colors) in self.0 {
            writeln!(w, "{:<14} {}", role.name(), colors.join(" "))?;
        }
        Ok(())
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        for (role, colors) in self.0 {
            write!(w, "{:<14} ", role.name())?;
            for hex in colors {
                swatch::block(w, hex, hex)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AlphaReport {
    pub color: String,
    pub variants: Vec<AlphaVariant>,
}

impl Report for AlphaReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}", self.color)?;
        for v in &self.variants {
            writeln!(w, "  {:>3}%  {}", v.percent(), v.rgba)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TextColorReport {
    pub background: String,
    pub text: &'static str,
    pub contrast: f64,
}

impl Report for TextColorReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{} on {}  {:.2}:1", self.text, self.background, self.contrast)
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        swatch::block(w, &self.background, self.text)?;
        writeln!(w, "  {:.2}:1", self.contrast)
    }
}

#[derive(Debug, Serialize)]
pub struct NearestReport {
    pub tone: f64,
    pub index: Option<usize>,
    pub step: Option<f64>,
}

impl Report for NearestReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        match (self.index, self.step) {
            (Some(index), Some(step)) => writeln!(w, "{index}  T{}", format_tone(step)),
            _ => writeln!(w, "no steps"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub hct: Vec<PaletteEntry>,
    pub approximated: Vec<PreviewEntry>,
}

impl Report for CompareReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "  tone   hct      approximated")?;
        for (a, b) in self.hct.iter().zip(&self.approximated) {
            writeln!(w, "  T{:<5}  {}  {}", format_tone(a.tone), a.hex, b.hex)?;
        }
        Ok(())
    }

    fn write_swatch(&self, w: &mut dyn Write) -> io::Result<()> {
        swatch::write_comparison(w, &self.hct, &self.approximated)
    }
}

impl Report for StyleReport {
    fn write_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "created {}  updated {}  skipped {}  stale {}",
            self.created, self.updated, self.skipped, self.stale
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(format: Format, report: &impl Report) -> String {
        let mut buf = Vec::new();
        emit(&mut buf, format, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn entry(tone: f64, hex: &str, chroma: f64) -> PaletteEntry {
        PaletteEntry { tone, hex: hex.to_owned(), chroma }
    }

    #[test]
    fn palette_table() {
        let report = PaletteReport::single("primary", vec![entry(0.0, "#000000", 0.0), entry(50.0, "#007AD1", 55.2667)]);
        assert_eq!(
            render(Format::Table, &report),
            "primary\n  T0      #000000  C0.00\n  T50     #007AD1  C55.27\n"
        );
    }

    #[test]
    fn palette_json_keeps_section_order() {
        let mut report = PaletteReport::single("primary", vec![entry(50.0, "#007AD1", 55.0)]);
        report.push("neutral", vec![]);
        let value: serde_json::Value = serde_json::from_str(&render(Format::Json, &report)).unwrap();
        assert_eq!(value["primary"][0]["hex"], "#007AD1");
        assert_eq!(value["neutral"], serde_json::json!([]));
        let json = render(Format::Json, &report);
        assert!(json.find("primary") < json.find("neutral"));
    }

    #[test]
    fn alpha_falls_back_to_table_for_swatch() {
        let report = AlphaReport {
            color: "#FF0000".to_owned(),
            variants: hct_palette::generate_alpha_variants("#FF0000").unwrap(),
        };
        let out = render(Format::Swatch, &report);
        assert!(out.starts_with("#FF0000\n    5%  rgba(255, 0, 0, 0.05)\n"));
    }

    #[test]
    fn hct_table() {
        let report = HctReport::from(Hct::from_hex("#1E88E5").unwrap());
        assert_eq!(render(Format::Table, &report), "#1E88E5  H275.22  C55.27  T55.62\n");
    }

    #[test]
    fn text_color_json() {
        let report = TextColorReport { background: "#000000".to_owned(), text: "#FFFFFF", contrast: 21.0 };
        let value: serde_json::Value = serde_json::from_str(&render(Format::Json, &report)).unwrap();
        assert_eq!(value["text"], "#FFFFFF");
    }

    #[test]
    fn nearest_without_steps() {
        let report = NearestReport { tone: 50.0, index: None, step: None };
        assert_eq!(render(Format::Table, &report), "no steps\n");
    }
}
