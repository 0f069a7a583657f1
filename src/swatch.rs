// SPDX-License-Identifier: MIT
//
// Terminal swatches: palette entries painted as 24-bit color blocks.
//
// Pure functions that write escape sequences to any `impl Write`. Every
// swatch row is a colored block carrying its own label in the readable
// text color for that background, followed by an SGR reset so nothing
// leaks into the next line.

use std::io::{self, Write};

use hct_color::{ColorError, Rgb, argb_from_hex, rgb8_from_argb};
use hct_palette::contrast::best_text_color_rgb;
use hct_palette::{PaletteEntry, PreviewEntry};

/// Width of the colored block, in columns.
const SWATCH_WIDTH: usize = 12;

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Set a 24-bit foreground color.
#[inline]
pub fn fg_rgb<W: Write + ?Sized>(w: &mut W, (r, g, b): (u8, u8, u8)) -> io::Result<()> {
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set a 24-bit background color.
#[inline]
pub fn bg_rgb<W: Write + ?Sized>(w: &mut W, (r, g, b): (u8, u8, u8)) -> io::Result<()> {
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Swatches ────────────────────────────────────────────────────────────────

/// Paint `hex` as a block labelled with `label`, without a newline.
pub fn block<W: Write + ?Sized>(w: &mut W, hex: &str, label: &str) -> io::Result<()> {
    let rgb = parse(hex)?;
    let text = parse(best_text_color_rgb(Rgb::from_rgb8(rgb.0, rgb.1, rgb.2)))?;
    bg_rgb(w, rgb)?;
    fg_rgb(w, text)?;
    write!(w, " {label:<width$}", width = SWATCH_WIDTH - 1)?;
    reset(w)
}

/// One line per entry: tone, swatch, hex and requested chroma.
pub fn write_palette<W: Write + ?Sized>(w: &mut W, title: &str, entries: &[PaletteEntry]) -> io::Result<()> {
    writeln!(w, "{title}")?;
    for entry in entries {
        write!(w, "  T{:<5} ", format_tone(entry.tone))?;
        block(w, &entry.hex, &entry.hex)?;
        writeln!(w, "  C{:.2}", entry.chroma)?;
    }
    Ok(())
}

/// Engine palette and preview approximation side by side.
pub fn write_comparison<W: Write + ?Sized>(
    w: &mut W,
    actual: &[PaletteEntry],
    approximated: &[PreviewEntry],
) -> io::Result<()> {
    writeln!(w, "  tone   {:<width$}  approximated", "hct", width = SWATCH_WIDTH)?;
    for (a, b) in actual.iter().zip(approximated) {
        write!(w, "  T{:<5} ", format_tone(a.tone))?;
        block(w, &a.hex, &a.hex)?;
        w.write_all(b"  ")?;
        block(w, &b.hex, &b.hex)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Whole tones print without a fraction.
pub fn format_tone(tone: f64) -> String {
    if tone.fract() == 0.0 { format!("{tone:.0}") } else { format!("{tone:.2}") }
}

fn parse(hex: &str) -> io::Result<(u8, u8, u8)> {
    argb_from_hex(hex)
        .map(rgb8_from_argb)
        .map_err(|e: ColorError| io::Error::new(io::ErrorKind::InvalidData, e))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn truecolor_sequences() {
        assert_eq!(emit(|w| fg_rgb(w, (30, 136, 229))), "\x1b[38;2;30;136;229m");
        assert_eq!(emit(|w| bg_rgb(w, (0, 0, 0))), "\x1b[48;2;0;0;0m");
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    #[test]
    fn block_uses_readable_text() {
        let out = emit(|w| block(w, "#000000", "#000000"));
        assert!(out.starts_with("\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m"));
        assert!(out.ends_with("\x1b[0m"));
        assert!(out.contains(" #000000    "));
    }

    #[test]
    fn palette_rows() {
        let entries = [PaletteEntry { tone: 50.0, hex: "#007AD1".to_owned(), chroma: 55.2667 }];
        let out = emit(|w| write_palette(w, "primary", &entries));
        assert!(out.starts_with("primary\n  T50    "));
        assert!(out.trim_end().ends_with("C55.27"));
    }

    #[test]
    fn bad_hex_is_invalid_data() {
        let mut buf = Vec::new();
        let err = block(&mut buf, "#12", "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn tone_formatting() {
        assert_eq!(format_tone(40.0), "40");
        assert_eq!(format_tone(70.710_678), "70.71");
    }
}
