//! Runtime configuration.
//!
//! Defaults can be overridden from the environment:
//!   `VERSEPAGE_MAP`              dataset path (default: `page_map.csv`)
//!   `VERSEPAGE_FALLBACK_VERSES`  verses assumed per chapter (default: 50)
//!
//! Command-line flags override both.

use std::env;
use std::path::PathBuf;

use versepage_foundation::{DEFAULT_FALLBACK_VERSES, Error, Result};
use versepage_index::IndexConfig;

/// Environment variable naming the dataset path.
pub const MAP_ENV: &str = "VERSEPAGE_MAP";
/// Environment variable overriding the fallback chapter length.
pub const FALLBACK_ENV: &str = "VERSEPAGE_FALLBACK_VERSES";

/// Settings for the CLI and REPL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Path of the page-data dataset.
    pub map_path: PathBuf,

    /// Verses assumed per chapter when expanding open-ended citations.
    pub fallback_verses: u32,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Whether the REPL prints its welcome banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("page_map.csv"),
            fallback_verses: DEFAULT_FALLBACK_VERSES,
            json_output: false,
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an override cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an override cannot be parsed.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(path) = lookup(MAP_ENV) {
            self.map_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(FALLBACK_ENV) {
            self.fallback_verses = parse_fallback(&value)?;
        }
        Ok(self)
    }

    /// Builder method to set the dataset path.
    #[must_use]
    pub fn with_map_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.map_path = path.into();
        self
    }

    /// Builder method to set the fallback chapter length.
    #[must_use]
    pub fn with_fallback_verses(mut self, verses: u32) -> Self {
        self.fallback_verses = verses;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to enable/disable the REPL banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Index build settings derived from this configuration.
    #[must_use]
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::default().with_fallback_verses(self.fallback_verses)
    }
}

/// Parses a fallback chapter length, which must be 1..=999.
///
/// # Errors
///
/// Returns a configuration error for non-numeric or out-of-range values.
pub fn parse_fallback(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n @ 1..=999) => Ok(n),
        _ => Err(Error::config(format!(
            "fallback verse count must be 1-999, got {value:?}"
        ))),
    }
}
