//! Analyzer configuration, loaded from TOML.
//!
//! ```toml
//! [dataset]
//! url = "https://example.org/sandhi.csv"
//! row_budget = 1000
//!
//! [lexicon]
//! path = "lexicon.rkyv"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub dataset: DatasetConfig,
    pub lexicon: LexiconConfig,
}

/// Sandhi augmentation dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// CSV location; `None` keeps the built-in rules only.
    pub url: Option<String>,
    /// Maximum data rows ingested.
    pub row_budget: usize,
    /// Examples retained per boundary pattern.
    pub examples_per_pattern: usize,
    /// Fused forms shorter than this never become segmentation patterns.
    pub min_surface_chars: usize,
    pub timeout_secs: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url: None,
            row_budget: 1000,
            examples_per_pattern: 5,
            min_surface_chars: 2,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Compiled lexicon layered under the built-in dictionary.
    pub path: Option<PathBuf>,
}

impl AnalyzerConfig {
    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
