use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lexicon loading or parsing error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Marker that cannot be matched against text
    #[error("Invalid marker: {0:?}")]
    InvalidMarker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let error = DomainError::ConfigurationError("bad toml".to_string());
        assert_eq!(error.to_string(), "Configuration error: bad toml");

        let error = DomainError::InvalidMarker("  ".to_string());
        assert_eq!(error.to_string(), "Invalid marker: \"  \"");
    }
}
