//! Substring marker detection for kireji and kigo

use crate::domain::error::DomainError;
use crate::domain::lexicon::default_lexicon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which marker family a detector scans for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Kireji-like pause punctuation and particles
    CuttingWord,
    /// Kigo-like seasonal references
    SeasonWord,
}

/// Outcome of scanning a text for markers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Whether any marker matched
    pub found: bool,
    /// Distinct matched markers, sorted
    pub matches: Vec<String>,
}

/// Case-insensitive substring detector over an extendable marker set
///
/// Markers are stored lowercased in insertion order. Matching is plain
/// substring containment, so `"ya"` also fires inside `"kayak"`.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    kind: MarkerKind,
    markers: Vec<String>,
}

impl MarkerDetector {
    /// Create a detector over an explicit marker list
    pub fn new<I, S>(kind: MarkerKind, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut detector = Self {
            kind,
            markers: Vec::new(),
        };
        for marker in markers {
            detector.add(marker.as_ref());
        }
        detector
    }

    /// Detector seeded with the built-in cutting-word markers
    pub fn cutting_words() -> Self {
        Self::new(
            MarkerKind::CuttingWord,
            &default_lexicon().cutting_words.markers,
        )
    }

    /// Detector seeded with the built-in season words
    pub fn season_words() -> Self {
        Self::new(
            MarkerKind::SeasonWord,
            default_lexicon().season_words.all_words(),
        )
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Current markers in insertion order
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Add a marker, lowercased. Returns `false` if it was already present
    /// or is blank.
    pub fn add(&mut self, marker: &str) -> bool {
        if marker.trim().is_empty() {
            return false;
        }

        let lower = marker.to_lowercase();
        if self.markers.contains(&lower) {
            return false;
        }

        log::trace!("Adding {:?} marker {:?}", self.kind, lower);
        self.markers.push(lower);
        true
    }

    /// Like [`add`](Self::add), but rejects blank markers with an error.
    pub fn try_add(&mut self, marker: &str) -> Result<bool, DomainError> {
        if marker.trim().is_empty() {
            return Err(DomainError::InvalidMarker(marker.to_string()));
        }
        Ok(self.add(marker))
    }

    /// Scan `text` for every marker
    pub fn detect(&self, text: &str) -> Detection {
        if text.is_empty() || self.markers.is_empty() {
            return Detection::default();
        }

        let lower = text.to_lowercase();
        let matches: BTreeSet<&str> = self
            .markers
            .iter()
            .filter(|marker| lower.contains(marker.as_str()))
            .map(String::as_str)
            .collect();

        Detection {
            found: !matches.is_empty(),
            matches: matches.into_iter().map(str::to_string).collect(),
        }
    }

    /// Whether any marker occurs in `text`
    pub fn contains_any(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.markers
            .iter()
            .any(|marker| lower.contains(marker.as_str()))
    }
}

/// Detect cutting-word markers with the built-in list.
pub fn detect_kireji(text: &str) -> Detection {
    MarkerDetector::cutting_words().detect(text)
}

/// Detect season words with the built-in list.
pub fn detect_season_words(text: &str) -> Vec<String> {
    MarkerDetector::season_words().detect(text).matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kireji() {
        let cases: [(&str, &[&str]); 8] = [
            ("old pond — frog jumps in", &["—"]),
            ("no pauses here at all", &[]),
            ("splash... silence again", &["..."]),
            ("hello, world! how are you?", &["!", "?"]),
            ("morning dew; birds singing", &[";"]),
            ("cherry blossoms — spring rain — peaceful", &["—"]),
            ("autumn leaves kana", &["kana"]),
            ("", &[]),
        ];

        for (text, expected) in cases {
            let detection = detect_kireji(text);
            assert_eq!(detection.found, !expected.is_empty(), "text: {text}");
            assert_eq!(detection.matches, expected, "text: {text}");
        }
    }

    #[test]
    fn test_detect_season_words() {
        let cases: [(&str, &[&str]); 8] = [
            ("cherry blossoms in spring", &["blossom", "cherry", "spring"]),
            ("summer heat and cicada song", &["cicada", "heat", "summer"]),
            ("autumn leaves fall down", &["autumn", "fall", "leaves"]),
            ("winter snow covers the ground", &["snow", "winter"]),
            ("the moon shines bright", &["bright", "moon"]),
            ("no seasonal references here", &[]),
            ("", &[]),
            ("spring rain spring flowers", &["rain", "spring"]),
        ];

        for (text, expected) in cases {
            assert_eq!(detect_season_words(text), expected, "text: {text}");
        }
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let detector = MarkerDetector::season_words();
        assert!(detector.contains_any("SUMMER fun"));
        assert_eq!(detector.detect("Winter Wonderland").matches, vec!["winter"]);
        assert!(!detector.contains_any("no seasonal words"));
        assert!(!detector.contains_any(""));
    }

    #[test]
    fn test_add_is_idempotent_and_lowercases() {
        let mut detector = MarkerDetector::season_words();
        let original_len = detector.len();

        assert!(detector.add("TestSeason"));
        assert_eq!(detector.len(), original_len + 1);
        assert!(!detector.add("testseason"));
        assert!(!detector.add("TESTSEASON"));
        assert_eq!(detector.len(), original_len + 1);

        assert!(detector
            .detect("beautiful testseason day")
            .matches
            .contains(&"testseason".to_string()));
    }

    #[test]
    fn test_added_marker_is_instance_local() {
        let mut detector = MarkerDetector::cutting_words();
        detector.add("@@test@@");

        let detection = detector.detect("hello @@test@@ world");
        assert!(detection.found);
        assert_eq!(detection.matches, vec!["@@test@@"]);

        // A fresh detector still has only the built-in list
        assert!(!MarkerDetector::cutting_words().detect("hello @@test@@ world").found);
    }

    #[test]
    fn test_blank_markers_rejected() {
        let mut detector = MarkerDetector::new(MarkerKind::CuttingWord, Vec::<String>::new());
        assert!(!detector.add(""));
        assert!(!detector.add("   "));
        assert!(matches!(
            detector.try_add(" "),
            Err(DomainError::InvalidMarker(_))
        ));
        assert!(detector.try_add("|").unwrap());
        assert!(!detector.try_add("|").unwrap());
    }

    #[test]
    fn test_empty_marker_set_detects_nothing() {
        let detector = MarkerDetector::new(MarkerKind::SeasonWord, Vec::<String>::new());
        assert!(detector.is_empty());
        assert_eq!(detector.detect("snow on the mountain"), Detection::default());
    }

    #[test]
    fn test_constructor_deduplicates() {
        let detector = MarkerDetector::new(MarkerKind::CuttingWord, ["!", "!", "Ya", "ya"]);
        assert_eq!(detector.markers(), &["!", "ya"]);
        assert_eq!(detector.kind(), MarkerKind::CuttingWord);
    }
}
