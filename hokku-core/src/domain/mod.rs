//! Domain layer: pure text heuristics and the data they produce
//!
//! Nothing here performs I/O. The only shared state is the embedded
//! lexicon, which is parsed once and read-only afterwards.

pub mod error;
pub mod lexicon;
pub mod markers;
pub mod poem;
pub mod syllables;
pub mod words;

pub use error::DomainError;
pub use markers::{detect_kireji, detect_season_words, Detection, MarkerDetector, MarkerKind};
pub use poem::{Metrics, Poem, LINE_COUNT, TARGET_PATTERN};
pub use syllables::{count_line_syllables, count_syllables, SyllableEstimator};
pub use words::extract_words;
