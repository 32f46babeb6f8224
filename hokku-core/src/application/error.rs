//! Errors raised while turning raw text into a poem

use crate::application::reconciler::Strategy;
use thiserror::Error;

/// Errors that can occur while parsing a poem
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not reconcile to exactly three lines
    #[error("haiku must have exactly 3 lines, got {count} (source={strategy})")]
    LineCount { count: usize, strategy: Strategy },
}
