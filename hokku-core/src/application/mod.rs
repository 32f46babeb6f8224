//! Application layer: from raw text to analysis results
//!
//! Orchestrates the domain heuristics without adding any of its own:
//!
//! - [`LineReconciler`] regroups arbitrary text into candidate lines
//! - [`PoemParser`] turns reconciled lines into a [`Poem`](crate::domain::Poem)
//! - [`Analyzer`] produces [`Metrics`](crate::domain::Metrics) for a poem
//!
//! # Example
//!
//! ```rust
//! use hokku_core::application::{Analyzer, PoemParser};
//!
//! let poem = PoemParser::new(true)
//!     .parse("an old silent pond / a frog jumps into the pond / splash silence again")
//!     .unwrap();
//! let metrics = Analyzer::new(0).analyze(&poem).unwrap();
//! assert!(metrics.valid_575);
//! ```

pub mod analyzer;
pub mod error;
pub mod parser;
pub mod reconciler;

pub use analyzer::{is_valid_575, Analyzer};
pub use error::ParseError;
pub use parser::PoemParser;
pub use reconciler::{LineReconciler, Reconciled, Strategy, SEPARATORS};
