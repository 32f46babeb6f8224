//! Poem and analysis snapshot types

use serde::{Deserialize, Serialize};

/// Number of lines in a haiku
pub const LINE_COUNT: usize = 3;

/// Target syllable count for each line
pub const TARGET_PATTERN: [usize; LINE_COUNT] = [5, 7, 5];

/// A poem as an ordered list of lines
///
/// Any number of lines can be stored, but only a three-line poem is valid
/// for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poem {
    lines: Vec<String>,
}

impl Poem {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the poem has exactly three lines
    pub fn is_valid(&self) -> bool {
        self.lines.len() == LINE_COUNT
    }

    /// Lines joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Analysis snapshot for one poem at one tolerance
///
/// Produced by the analyzer and never updated afterwards; changing the
/// analyzer's tolerance does not touch metrics already handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub lines: Vec<String>,
    pub line_syllables: Vec<usize>,
    pub line_words: Vec<usize>,
    pub total_syllables: usize,
    pub total_words: usize,
    /// Distinct lowercase words
    pub unique_words: usize,
    /// `unique_words / total_words`, 0 for an empty poem
    pub lexical_density: f64,
    /// Mean word length in characters, 0 for an empty poem
    #[serde(rename = "avg_word_len")]
    pub avg_word_length: f64,
    #[serde(rename = "has_kireji_like_pause")]
    pub has_cutting_marker: bool,
    #[serde(rename = "kireji_hits")]
    pub cutting_markers: Vec<String>,
    pub season_words: Vec<String>,
    pub valid_575: bool,
    pub tolerance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poem_validity() {
        assert!(Poem::new(["a", "b", "c"]).is_valid());
        assert!(!Poem::new(["a", "b"]).is_valid());
        assert!(!Poem::new(["a", "b", "c", "d"]).is_valid());
        assert!(!Poem::new(Vec::<String>::new()).is_valid());
    }

    #[test]
    fn test_poem_text_joins_with_newlines() {
        let poem = Poem::new(["old pond", "frog jumps in", "splash"]);
        assert_eq!(poem.text(), "old pond\nfrog jumps in\nsplash");
        assert_eq!(poem.line_count(), 3);
        assert_eq!(poem.lines()[1], "frog jumps in");
    }

    #[test]
    fn test_metrics_serialized_field_names() {
        let metrics = Metrics {
            lines: vec!["a".into(), "b".into(), "c".into()],
            line_syllables: vec![1, 1, 1],
            line_words: vec![1, 1, 1],
            total_syllables: 3,
            total_words: 3,
            unique_words: 3,
            lexical_density: 1.0,
            avg_word_length: 1.0,
            has_cutting_marker: false,
            cutting_markers: vec![],
            season_words: vec![],
            valid_575: false,
            tolerance: 0,
        };

        let json = serde_json::to_value(&metrics).unwrap();
        for key in [
            "lines",
            "line_syllables",
            "line_words",
            "total_syllables",
            "total_words",
            "unique_words",
            "lexical_density",
            "avg_word_len",
            "has_kireji_like_pause",
            "kireji_hits",
            "season_words",
            "valid_575",
            "tolerance",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
