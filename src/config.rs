//! Composer options.
//!
//! All options have defaults that reproduce the established naming scheme,
//! including its quirks. An options file only needs the keys it changes:
//!
//! ```toml
//! collapse_whitespace = true
//! multisub_threshold = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_SNAP_TOLERANCE;
use crate::Error;

/// Subtitle lists longer than this collapse to "MultiSub".
pub const DEFAULT_MULTISUB_THRESHOLD: usize = 3;

/// Options controlling tag composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    /// Pixels (exclusive) within which a computed height snaps to a resolution bucket
    pub snap_tolerance: u32,
    /// Maximum number of distinct subtitle codes listed before "MultiSub"
    pub multisub_threshold: usize,
    /// Join tag segments with single spaces, dropping empty ones.
    /// Off by default: empty audio or subtitle segments leave double spaces.
    pub collapse_whitespace: bool,
    /// Unquote 'XXX' style language codes in the final name
    pub strip_quoted_codes: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            multisub_threshold: DEFAULT_MULTISUB_THRESHOLD,
            collapse_whitespace: false,
            strip_quoted_codes: true,
        }
    }
}

impl ComposeOptions {
    /// Parse options from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded compose options from {}", path.display());
        Ok(options)
    }
}
