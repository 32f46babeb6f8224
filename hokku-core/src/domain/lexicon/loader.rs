use super::types::LexiconConfig;
use crate::domain::error::DomainError;
use std::sync::OnceLock;

static DEFAULT_LEXICON: OnceLock<LexiconConfig> = OnceLock::new();

const EMBEDDED_LEXICON: &str = include_str!("../../../configs/lexicon/english.toml");

/// Parse and validate a lexicon from TOML text.
pub fn parse_lexicon(toml_content: &str) -> Result<LexiconConfig, DomainError> {
    let config: LexiconConfig = toml::from_str(toml_content)
        .map_err(|e| DomainError::ConfigurationError(format!("Failed to parse lexicon: {e}")))?;

    validate_lexicon(&config)?;
    Ok(config)
}

fn validate_lexicon(config: &LexiconConfig) -> Result<(), DomainError> {
    if config.metadata.code != "en" {
        return Err(DomainError::ConfigurationError(format!(
            "Lexicon code mismatch: expected en, got {}",
            config.metadata.code
        )));
    }

    if let Some((word, _)) = config
        .syllables
        .exceptions
        .iter()
        .find(|(_, count)| **count == 0)
    {
        return Err(DomainError::ConfigurationError(format!(
            "Exception entry '{word}' must have at least one syllable"
        )));
    }

    let blank_marker = config
        .cutting_words
        .markers
        .iter()
        .chain(config.season_words.all_words().iter())
        .any(|marker| marker.trim().is_empty());
    if blank_marker {
        return Err(DomainError::ConfigurationError(
            "Lexicon markers must not be blank".to_string(),
        ));
    }

    Ok(())
}

/// The built-in English lexicon, parsed once on first use.
pub fn default_lexicon() -> &'static LexiconConfig {
    DEFAULT_LEXICON.get_or_init(|| {
        let config = parse_lexicon(EMBEDDED_LEXICON).expect("Failed to load embedded lexicon");
        log::debug!(
            "Loaded embedded lexicon '{}' ({} exceptions, {} cutting markers)",
            config.metadata.name,
            config.syllables.exceptions.len(),
            config.cutting_words.markers.len()
        );
        config
    })
}
