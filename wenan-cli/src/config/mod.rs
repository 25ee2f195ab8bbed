//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wenan_core::DEFAULT_MAX_SEGMENT_CHARS;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Corpus configuration
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Segmentation configuration
    #[serde(default)]
    pub segment: SegmentConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Corpus-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CorpusConfig {
    /// Default corpus file used when --corpus is not given
    pub path: Option<PathBuf>,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct SegmentConfig {
    /// Maximum characters per segment
    pub max_chars: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_SEGMENT_CHARS,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from an optional path, defaulting when absent
    ///
    /// An explicitly named file that cannot be read is an error; no file
    /// at all just means built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
