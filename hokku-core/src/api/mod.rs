//! Public API for poem analysis
//!
//! Wraps the application layer behind a single configured processor and
//! an [`Input`] abstraction for text, files, bytes and readers.

mod config;
mod error;
mod input;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use processor::{analyze_text, analyze_text_with_autosplit, parse_poem, PoemProcessor};
