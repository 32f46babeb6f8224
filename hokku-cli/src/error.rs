//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// Nothing was piped to stdin and no input files were given
    NoInput,
    /// The output file is the only input
    OutputIsInput(String),
    /// Some inputs could not be analyzed
    AnalysisFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NoInput => write!(f, "no input provided via stdin"),
            CliError::OutputIsInput(path) => {
                write!(f, "Output file is also the input: {path}")
            }
            CliError::AnalysisFailed { failed, total } => {
                write!(f, "{failed} of {total} input(s) could not be analyzed")
            }
        }
    }
}

impl std::error::Error for CliError {}
