//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Extra markers on top of the built-in lexicon
    #[serde(default)]
    pub markers: MarkersConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Allowed per-line syllable deviation from 5-7-5
    pub tolerance: u32,

    /// Split single-line input on separators and punctuation
    pub autosplit: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: hokku_core::api::defaults::TOLERANCE,
            autosplit: hokku_core::api::defaults::AUTOSPLIT,
        }
    }
}

/// Marker-related configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkersConfig {
    pub season_words: Vec<String>,
    pub cutting_markers: Vec<String>,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank marker entries
    pub fn validate(&self) -> Result<(), CliError> {
        let blank_season = self
            .markers
            .season_words
            .iter()
            .any(|word| word.trim().is_empty());
        if blank_season {
            return Err(CliError::ConfigError(
                "season_words must not contain blank entries".to_string(),
            ));
        }

        let blank_cutting = self
            .markers
            .cutting_markers
            .iter()
            .any(|marker| marker.trim().is_empty());
        if blank_cutting {
            return Err(CliError::ConfigError(
                "cutting_markers must not contain blank entries".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the analysis configuration for the core processor
    pub fn core_config(&self) -> Result<hokku_core::Config> {
        let config = hokku_core::Config::builder()
            .tolerance(self.analysis.tolerance)
            .autosplit(self.analysis.autosplit)
            .season_words(self.markers.season_words.iter().cloned())
            .cutting_markers(self.markers.cutting_markers.iter().cloned())
            .build()?;
        Ok(config)
    }
}
