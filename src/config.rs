// SPDX-License-Identifier: MIT
//
// Optional TOML configuration for `hct-gen`.
//
// Resolution order, later wins:
//
//   built-in defaults → config file (--config) → command-line flags
//
// Every key in the file is optional and unknown keys are rejected, so a
// typo fails loudly instead of silently falling back to a default.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use hct_color::{ColorError, argb_from_hex, hex_from_argb};
use hct_palette::{CurveFunction, FunctionalPaletteType};
use serde::{Deserialize, Deserializer};

use crate::error::{CliError, Result};

pub const DEFAULT_BASE_COLOR: &str = "#1E88E5";
pub const DEFAULT_STEP_COUNT: usize = 22;
pub const DEFAULT_FUNCTIONAL_STEPS: usize = 5;

// ─── Hex Color ───────────────────────────────────────────────────────────────

/// A validated `#RRGGBB` color, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        argb_from_hex(s).map(|argb| Self(hex_from_argb(argb)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| serde::de::Error::custom(format!("{s} is not a valid hex color")))
    }
}

// ─── File Layer ──────────────────────────────────────────────────────────────

/// The config file as written. Absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_color: Option<HexColor>,
    pub curve: Option<CurveFunction>,
    pub step_count: Option<usize>,
    pub include_extremes: Option<bool>,
    pub neutral_include_extremes: Option<bool>,
    pub functional_type: Option<FunctionalPaletteType>,
    pub functional_steps: Option<usize>,
}

impl ConfigFile {
    /// Read and parse `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadFile`] if the file cannot be read and
    /// [`CliError::Config`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| CliError::Config { path: path.to_path_buf(), source })
    }
}

// ─── Resolved Settings ───────────────────────────────────────────────────────

/// Fully resolved settings every subcommand reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_color: HexColor,
    pub curve: CurveFunction,
    pub step_count: usize,
    pub include_extremes: bool,
    pub neutral_include_extremes: bool,
    pub functional_type: FunctionalPaletteType,
    pub functional_steps: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_color: HexColor(DEFAULT_BASE_COLOR.to_owned()),
            curve: CurveFunction::SShaped,
            step_count: DEFAULT_STEP_COUNT,
            include_extremes: false,
            neutral_include_extremes: true,
            functional_type: FunctionalPaletteType::Pastel,
            functional_steps: DEFAULT_FUNCTIONAL_STEPS,
        }
    }
}

/// Values the command line may override. `None` keeps the lower layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_color: Option<HexColor>,
    pub curve: Option<CurveFunction>,
    pub step_count: Option<usize>,
    pub include_extremes: Option<bool>,
}

impl Settings {
    /// Defaults, then `path` if given.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigFile::load`] failures.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading config");
            settings.merge_file(ConfigFile::load(path)?);
        }
        Ok(settings)
    }

    pub fn merge_file(&mut self, file: ConfigFile) {
        if let Some(v) = file.base_color {
            self.base_color = v;
        }
        if let Some(v) = file.curve {
            self.curve = v;
        }
        if let Some(v) = file.step_count {
            self.step_count = v;
        }
        if let Some(v) = file.include_extremes {
            self.include_extremes = v;
        }
        if let Some(v) = file.neutral_include_extremes {
            self.neutral_include_extremes = v;
        }
        if let Some(v) = file.functional_type {
            self.functional_type = v;
        }
        if let Some(v) = file.functional_steps {
            self.functional_steps = v;
        }
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.base_color {
            self.base_color = v;
        }
        if let Some(v) = overrides.curve {
            self.curve = v;
        }
        if let Some(v) = overrides.step_count {
            self.step_count = v;
        }
        if let Some(v) = overrides.include_extremes {
            self.include_extremes = v;
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> std::result::Result<ConfigFile, toml::de::Error> {
        toml::from_str(text)
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let mut settings = Settings::default();
        settings.merge_file(parse("").unwrap());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.base_color.as_str(), "#1E88E5");
        assert_eq!(settings.curve, CurveFunction::SShaped);
        assert_eq!(settings.step_count, 22);
    }

    #[test]
    fn full_file() {
        let file = parse(
            r##"
            base_color = "#d32f2f"
            curve = "material"
            step_count = 13
            include_extremes = true
            neutral_include_extremes = false
            functional_type = "deep"
            functional_steps = 7
            "##,
        )
        .unwrap();
        let mut settings = Settings::default();
        settings.merge_file(file);
        assert_eq!(
            settings,
            Settings {
                base_color: HexColor("#D32F2F".to_owned()),
                curve: CurveFunction::Material,
                step_count: 13,
                include_extremes: true,
                neutral_include_extremes: false,
                functional_type: FunctionalPaletteType::Deep,
                functional_steps: 7,
            }
        );
    }

    #[test]
    fn curve_names_use_kebab_case() {
        assert_eq!(parse(r#"curve = "s-shaped""#).unwrap().curve, Some(CurveFunction::SShaped));
        assert!(parse(r#"curve = "SShaped""#).is_err());
    }

    #[test]
    fn rejects_bad_hex() {
        let err = parse(r##"base_color = "#abc""##).unwrap_err();
        assert!(err.to_string().contains("#abc is not a valid hex color"));
        assert!(parse(r#"base_color = "1e88e5""#).is_ok());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse("steps = 5").is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let mut settings = Settings::default();
        settings.merge_file(parse("step_count = 13\ninclude_extremes = true").unwrap());
        settings.apply(Overrides {
            step_count: Some(5),
            include_extremes: Some(false),
            ..Overrides::default()
        });
        assert_eq!(settings.step_count, 5);
        assert!(!settings.include_extremes);
        assert_eq!(settings.curve, CurveFunction::SShaped);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/hct-gen.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ReadFile { .. }));
    }
}
