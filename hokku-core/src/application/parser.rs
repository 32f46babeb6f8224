//! Poem parsing on top of line reconciliation

use crate::application::error::ParseError;
use crate::application::reconciler::{LineReconciler, Reconciled};
use crate::domain::Poem;

/// Parses raw text into a three-line [`Poem`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PoemParser {
    reconciler: LineReconciler,
}

impl PoemParser {
    pub fn new(autosplit: bool) -> Self {
        Self {
            reconciler: LineReconciler::new(autosplit),
        }
    }

    pub fn autosplit(&self) -> bool {
        self.reconciler.autosplit()
    }

    /// Parse `text`, failing unless exactly three lines come out
    pub fn parse(&self, text: &str) -> Result<Poem, ParseError> {
        let Reconciled { lines, strategy } = self.reconciler.reconcile(text);

        if lines.len() != crate::domain::LINE_COUNT {
            return Err(ParseError::LineCount {
                count: lines.len(),
                strategy,
            });
        }

        Ok(Poem::new(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::reconciler::Strategy;

    #[test]
    fn test_parse_multiline() {
        let poem = PoemParser::new(false)
            .parse("old pond\nfrog jumps in\nsplash!")
            .unwrap();
        assert_eq!(poem.lines(), &["old pond", "frog jumps in", "splash!"]);
        assert!(poem.is_valid());
    }

    #[test]
    fn test_parse_rejects_single_line_without_autosplit() {
        let err = PoemParser::new(false)
            .parse("old pond / frog jumps in / splash")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::LineCount {
                count: 1,
                strategy: Strategy::Raw
            }
        );
    }

    #[test]
    fn test_parse_with_autosplit() {
        let poem = PoemParser::new(true)
            .parse("old pond / frog jumps in / splash")
            .unwrap();
        assert_eq!(poem.line_count(), 3);
        assert!(PoemParser::new(true).autosplit());
    }

    #[test]
    fn test_parse_empty_input() {
        let err = PoemParser::new(true).parse("").unwrap_err();
        assert!(err.to_string().contains("got 0"));
    }
}
