//! Main poem processor implementation

use std::io::Read;

use crate::api::{Config, Error, Input};
use crate::application::{Analyzer, PoemParser};
use crate::domain::{Metrics, Poem};

/// Parses and analyzes poems with one configuration
#[derive(Debug, Clone)]
pub struct PoemProcessor {
    parser: PoemParser,
    analyzer: Analyzer,
    config: Config,
}

impl PoemProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let mut analyzer = Analyzer::new(config.tolerance);
        for word in &config.season_words {
            analyzer.season_words_mut().try_add(word)?;
        }
        for marker in &config.cutting_markers {
            analyzer.cutting_words_mut().try_add(marker)?;
        }

        Ok(Self {
            parser: PoemParser::new(config.autosplit),
            analyzer,
            config,
        })
    }

    /// Read input and parse it into a three-line poem
    pub fn parse(&self, input: Input) -> Result<Poem, Error> {
        let text = input.into_text()?;
        Ok(self.parser.parse(&text)?)
    }

    /// Read, parse and analyze input
    pub fn process(&self, input: Input) -> Result<Metrics, Error> {
        let poem = self.parse(input)?;
        self.analyze(&poem)
    }

    /// Parse and analyze text directly
    pub fn process_text(&self, text: &str) -> Result<Metrics, Error> {
        let poem = self.parser.parse(text)?;
        self.analyze(&poem)
    }

    /// Process input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Metrics, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Analyze an already-parsed poem
    pub fn analyze(&self, poem: &Poem) -> Result<Metrics, Error> {
        self.analyzer.analyze(poem).ok_or_else(|| {
            Error::InvalidInput(format!(
                "poem must have exactly 3 lines, got {}",
                poem.line_count()
            ))
        })
    }

    /// Whether the poem fits 5-7-5 at the current tolerance
    pub fn is_valid_575(&self, poem: &Poem) -> bool {
        self.analyzer
            .analyze(poem)
            .is_some_and(|metrics| metrics.valid_575)
    }

    /// Change the tolerance for subsequent analyses
    pub fn set_tolerance(&mut self, tolerance: u32) {
        self.config.tolerance = tolerance;
        self.analyzer.set_tolerance(tolerance);
    }

    pub fn tolerance(&self) -> u32 {
        self.analyzer.tolerance()
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for PoemProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Parse a strictly three-line poem (no autosplit)
pub fn parse_poem(text: &str) -> Result<Poem, Error> {
    Ok(PoemParser::new(false).parse(text)?)
}

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> Result<Metrics, Error> {
    PoemProcessor::new().process_text(text)
}

/// Analyze text, splitting single-line input when possible
pub fn analyze_text_with_autosplit(text: &str) -> Result<Metrics, Error> {
    let config = Config::builder().autosplit(true).build()?;
    PoemProcessor::with_config(config)?.process_text(text)
}
