//! Output formatting module

use anyhow::Result;
use hokku_core::Metrics;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the analysis of one poem
    fn format_metrics(&mut self, source: &str, metrics: &Metrics) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report per poem
    #[default]
    Text,
    /// JSON array of analyses
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Human-readable report per poem",
            OutputFormat::Json => "JSON array of {source, metrics} objects",
            OutputFormat::Markdown => "Markdown table per poem",
        }
    }

    /// Build the formatter for this format on top of `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Items joined with ", ", or "none" when empty
pub(crate) fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Syllable counts as "5-7-5"
pub(crate) fn pattern(syllables: &[usize]) -> String {
    syllables
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use hokku_core::{Metrics, PoemProcessor};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn classic() -> Metrics {
        PoemProcessor::new()
            .process_text("an old silent pond\na frog jumps into the pond\nsplash silence again")
            .unwrap()
    }

    pub fn short() -> Metrics {
        PoemProcessor::new()
            .process_text("old pond—\nfrog jumps in\nsplash!")
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_format_names_match_value_enum() {
        for format in OutputFormat::ALL {
            let parsed = OutputFormat::from_str(format.name(), false).unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let wrapper: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(pattern(&[5, 7, 5]), "5-7-5");
        assert_eq!(list_or_none(&[]), "none");
        assert_eq!(list_or_none(&["!".to_string(), "—".to_string()]), "!, —");
    }
}
