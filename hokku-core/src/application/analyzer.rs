//! Poem analysis: syllables, lexical statistics and literary markers

use crate::domain::{
    extract_words, MarkerDetector, Metrics, Poem, SyllableEstimator, LINE_COUNT, TARGET_PATTERN,
};
use std::collections::HashSet;

/// Check a syllable sequence against 5-7-5 within `tolerance`.
///
/// Anything other than exactly three counts is invalid.
pub fn is_valid_575(syllables: &[usize], tolerance: u32) -> bool {
    if syllables.len() != LINE_COUNT {
        return false;
    }

    syllables
        .iter()
        .zip(TARGET_PATTERN)
        .all(|(&actual, target)| actual.abs_diff(target) <= tolerance as usize)
}

/// Produces [`Metrics`] for three-line poems
///
/// Owns its syllable estimator and both marker detectors, so extending the
/// marker sets through [`cutting_words_mut`](Self::cutting_words_mut) or
/// [`season_words_mut`](Self::season_words_mut) only affects this analyzer.
#[derive(Debug, Clone)]
pub struct Analyzer {
    tolerance: u32,
    estimator: SyllableEstimator,
    cutting_words: MarkerDetector,
    season_words: MarkerDetector,
}

impl Analyzer {
    /// Create an analyzer with the built-in lexicon
    pub fn new(tolerance: u32) -> Self {
        Self::with_components(
            tolerance,
            SyllableEstimator::new(),
            MarkerDetector::cutting_words(),
            MarkerDetector::season_words(),
        )
    }

    /// Create an analyzer from explicit components
    pub fn with_components(
        tolerance: u32,
        estimator: SyllableEstimator,
        cutting_words: MarkerDetector,
        season_words: MarkerDetector,
    ) -> Self {
        Self {
            tolerance,
            estimator,
            cutting_words,
            season_words,
        }
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Change the tolerance used for future analyses
    pub fn set_tolerance(&mut self, tolerance: u32) {
        self.tolerance = tolerance;
    }

    pub fn estimator(&self) -> &SyllableEstimator {
        &self.estimator
    }

    pub fn cutting_words(&self) -> &MarkerDetector {
        &self.cutting_words
    }

    pub fn cutting_words_mut(&mut self) -> &mut MarkerDetector {
        &mut self.cutting_words
    }

    pub fn season_words(&self) -> &MarkerDetector {
        &self.season_words
    }

    pub fn season_words_mut(&mut self) -> &mut MarkerDetector {
        &mut self.season_words
    }

    /// Check a syllable sequence against 5-7-5 at this analyzer's tolerance
    pub fn is_valid_575(&self, syllables: &[usize]) -> bool {
        is_valid_575(syllables, self.tolerance)
    }

    /// Analyze a poem. Returns `None` unless it has exactly three lines.
    pub fn analyze(&self, poem: &Poem) -> Option<Metrics> {
        if !poem.is_valid() {
            log::debug!(
                "Skipping analysis of a {}-line poem",
                poem.line_count()
            );
            return None;
        }

        let mut line_syllables = vec![0usize; LINE_COUNT];
        let mut line_words = vec![0usize; LINE_COUNT];
        let mut total_letters = 0usize;
        let mut unique_words: HashSet<String> = HashSet::new();

        for (i, line) in poem.lines().iter().enumerate() {
            let words = extract_words(line);
            line_words[i] = words.len();

            for word in words {
                let lower = word.to_lowercase();
                line_syllables[i] += self.estimator.count(&lower);
                total_letters += lower.chars().count();
                unique_words.insert(lower);
            }
        }

        let total_syllables: usize = line_syllables.iter().sum();
        let total_words: usize = line_words.iter().sum();
        let unique_count = unique_words.len();

        let (lexical_density, avg_word_length) = if total_words > 0 {
            (
                unique_count as f64 / total_words as f64,
                total_letters as f64 / total_words as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let full_text = poem.lines().join(" ");
        let cutting = self.cutting_words.detect(&full_text);
        let seasons = self.season_words.detect(&full_text);

        let valid_575 = self.is_valid_575(&line_syllables);
        log::debug!(
            "Analyzed poem: syllables {:?}, valid_575={} (tolerance {})",
            line_syllables,
            valid_575,
            self.tolerance
        );

        Some(Metrics {
            lines: poem.lines().to_vec(),
            line_syllables,
            line_words,
            total_syllables,
            total_words,
            unique_words: unique_count,
            lexical_density,
            avg_word_length,
            has_cutting_marker: cutting.found,
            cutting_markers: cutting.matches,
            season_words: seasons.matches,
            valid_575,
            tolerance: self.tolerance,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(0)
    }
}
