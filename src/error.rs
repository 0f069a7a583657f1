// SPDX-License-Identifier: MIT
//
// Errors surfaced by the `hct-gen` binary. `main` prints them once and
// exits with status 1.

use std::io;
use std::path::PathBuf;

use hct_color::ColorError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("cannot read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("invalid config {path}: {source}")]
    Config { path: PathBuf, source: toml::de::Error },

    #[error("invalid style sheet {path}: {source}")]
    StyleSheet { path: PathBuf, source: serde_json::Error },

    #[error("style export cancelled after {processed} of {total} entries")]
    Cancelled { processed: usize, total: usize },

    #[error("style name pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
