//! Nearest-tone lookups.
//!
//! All lookups scan left to right and only replace the current best on a
//! strictly smaller distance, so ties resolve to the earliest candidate.

use crate::palette::PaletteEntry;

/// Distance within which [`find_tone_by_value`] accepts the first match.
pub const TONE_MATCH_WINDOW: f64 = 5.0;

/// Index of the step closest to `target`. `None` for an empty slice.
#[must_use]
pub fn find_nearest_tone_index<T: Copy + Into<f64>>(target: f64, steps: &[T]) -> Option<usize> {
    nearest_by(steps, target, |&t| t.into())
}

/// The step closest to `target`. `None` for an empty slice.
#[must_use]
pub fn find_nearest_tone<T: Copy + Into<f64>>(target: f64, steps: &[T]) -> Option<T> {
    find_nearest_tone_index(target, steps).map(|i| steps[i])
}

/// The first entry within [`TONE_MATCH_WINDOW`] of `target`, falling back
/// to the nearest entry overall.
#[must_use]
pub fn find_tone_by_value(entries: &[PaletteEntry], target: f64) -> Option<&PaletteEntry> {
    entries
        .iter()
        .find(|e| (e.tone - target).abs() < TONE_MATCH_WINDOW)
        .or_else(|| nearest_by(entries, target, |e| e.tone).map(|i| &entries[i]))
}

fn nearest_by<T>(items: &[T], target: f64, tone: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, item) in items.iter().enumerate() {
        let distance = (tone(item) - target).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::MATERIAL_TONE_STEPS;

    fn entry(tone: f64, hex: &str) -> PaletteEntry {
        PaletteEntry { tone, hex: hex.to_owned(), chroma: 0.0 }
    }

    #[test]
    fn tie_goes_to_first() {
        assert_eq!(find_nearest_tone(50.0, &[40u8, 60]), Some(40));
        assert_eq!(find_nearest_tone(50.0, &[60u8, 40]), Some(60));
        assert_eq!(find_nearest_tone_index(50.0, &[40u8, 60]), Some(0));
    }

    #[test]
    fn material_steps() {
        assert_eq!(find_nearest_tone(7.0, &MATERIAL_TONE_STEPS), Some(8));
        assert_eq!(find_nearest_tone_index(97.0, &MATERIAL_TONE_STEPS), Some(11));
        assert_eq!(find_nearest_tone_index(100.0, &MATERIAL_TONE_STEPS), Some(12));
    }

    #[test]
    fn float_steps() {
        assert_eq!(find_nearest_tone_index(33.3, &[0.0, 33.0, 66.0, 100.0]), Some(1));
    }

    #[test]
    fn empty_steps() {
        assert_eq!(find_nearest_tone::<u8>(50.0, &[]), None);
        assert_eq!(find_nearest_tone_index::<f64>(50.0, &[]), None);
    }

    #[test]
    fn by_value_prefers_first_in_window() {
        let entries = [entry(36.0, "#A"), entry(42.0, "#B"), entry(40.0, "#C")];
        // 36 is within 5 of 40 and comes first, even though 40 is exact.
        assert_eq!(find_tone_by_value(&entries, 40.0).map(|e| e.hex.as_str()), Some("#A"));
    }

    #[test]
    fn by_value_falls_back_to_nearest() {
        let entries = [entry(10.0, "#A"), entry(30.0, "#B"), entry(70.0, "#C")];
        assert_eq!(find_tone_by_value(&entries, 45.0).map(|e| e.hex.as_str()), Some("#B"));
        assert!(find_tone_by_value(&[], 45.0).is_none());
    }
}
