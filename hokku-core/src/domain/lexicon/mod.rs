//! Built-in lexicon: syllable exceptions and default marker lists

mod loader;
mod types;

pub use loader::{default_lexicon, parse_lexicon};
pub use types::{
    CuttingWordConfig, LexiconConfig, MetadataConfig, Season, SeasonWordConfig, SyllableConfig,
};
