//! Heuristic haiku analysis
//!
//! This crate estimates whether a three-line poem follows the 5-7-5
//! syllable pattern and extracts a few literary signals along the way:
//! kireji-like pauses, kigo-like season words and simple lexical
//! statistics. Syllable counts come from an exception table plus
//! vowel-group heuristics; they are approximations, not phonetics.
//!
//! # Architecture
//!
//! - **Domain layer**: word extraction, syllable estimation, marker
//!   detection and the embedded lexicon
//! - **Application layer**: line reconciliation, poem parsing and analysis
//! - **API layer**: configuration, input sources and a single processor
//!
//! # Example
//!
//! ```rust
//! use hokku_core::{Config, Input, PoemProcessor};
//!
//! let processor = PoemProcessor::with_config(
//!     Config::builder().tolerance(0).build().unwrap(),
//! )
//! .unwrap();
//!
//! let text = "an old silent pond\na frog jumps into the pond\nsplash silence again";
//! let metrics = processor.process(Input::from_text(text)).unwrap();
//!
//! assert_eq!(metrics.line_syllables, vec![5, 7, 5]);
//! assert!(metrics.valid_575);
//! ```

pub mod api;
pub mod application;
pub mod domain;

pub use api::{
    analyze_text, analyze_text_with_autosplit, parse_poem, Config, ConfigBuilder,
    Error as ApiError, Input, PoemProcessor,
};
pub use application::{Analyzer, LineReconciler, ParseError, PoemParser, Reconciled, Strategy};
pub use domain::{
    count_line_syllables, count_syllables, detect_kireji, detect_season_words, extract_words,
    Detection, DomainError, MarkerDetector, MarkerKind, Metrics, Poem, SyllableEstimator,
};
