//! Configuration API for poem analysis

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Strict 5-7-5 by default
    pub const TOLERANCE: u32 = 0;

    /// Single-line input is not split unless asked for
    pub const AUTOSPLIT: bool = false;
}

/// Analysis configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) tolerance: u32,
    pub(crate) autosplit: bool,
    pub(crate) season_words: Vec<String>,
    pub(crate) cutting_markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: defaults::TOLERANCE,
            autosplit: defaults::AUTOSPLIT,
            season_words: Vec::new(),
            cutting_markers: Vec::new(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Per-line syllable deviation allowed from 5-7-5
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Whether single-line input may be split into three lines
    pub fn autosplit(&self) -> bool {
        self.autosplit
    }

    /// Season words added on top of the built-in list
    pub fn season_words(&self) -> &[String] {
        &self.season_words
    }

    /// Cutting markers added on top of the built-in list
    pub fn cutting_markers(&self) -> &[String] {
        &self.cutting_markers
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(blank) = self
            .season_words
            .iter()
            .chain(&self.cutting_markers)
            .find(|marker| marker.trim().is_empty())
        {
            return Err(Error::Configuration(format!(
                "markers must not be blank (got {blank:?})"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    tolerance: Option<u32>,
    autosplit: Option<bool>,
    season_words: Vec<String>,
    cutting_markers: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the syllable tolerance
    pub fn tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Enable or disable single-line autosplitting
    pub fn autosplit(mut self, enabled: bool) -> Self {
        self.autosplit = Some(enabled);
        self
    }

    /// Add one season word
    pub fn season_word(mut self, word: impl Into<String>) -> Self {
        self.season_words.push(word.into());
        self
    }

    /// Add several season words
    pub fn season_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add one cutting marker
    pub fn cutting_marker(mut self, marker: impl Into<String>) -> Self {
        self.cutting_markers.push(marker.into());
        self
    }

    /// Add several cutting markers
    pub fn cutting_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cutting_markers
            .extend(markers.into_iter().map(Into::into));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }

        if let Some(autosplit) = self.autosplit {
            config.autosplit = autosplit;
        }

        config.season_words = self.season_words;
        config.cutting_markers = self.cutting_markers;

        config.validate()?;
        Ok(config)
    }
}
