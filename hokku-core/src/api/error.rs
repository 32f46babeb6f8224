//! Error types for the API

use crate::application::ParseError;
use crate::domain::DomainError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input did not parse into a poem
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Lexicon or marker error from the domain layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error while reading input
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 encoding: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
