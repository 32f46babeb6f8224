//! Plain text output formatter

use super::{list_or_none, pattern, OutputFormatter};
use anyhow::Result;
use hokku_core::Metrics;
use std::io::Write;

/// Plain text formatter - one report block per poem
pub struct TextFormatter<W: Write> {
    writer: W,
    poem_count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            poem_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_metrics(&mut self, source: &str, metrics: &Metrics) -> Result<()> {
        if self.poem_count > 0 {
            writeln!(self.writer)?;
        }
        self.poem_count += 1;

        writeln!(self.writer, "source: {source}")?;
        for (line, syllables) in metrics.lines.iter().zip(&metrics.line_syllables) {
            writeln!(self.writer, "  [{syllables}] {line}")?;
        }
        writeln!(
            self.writer,
            "pattern: {} ({}, tolerance {})",
            pattern(&metrics.line_syllables),
            if metrics.valid_575 { "valid" } else { "invalid" },
            metrics.tolerance
        )?;
        writeln!(
            self.writer,
            "words: {} total, {} unique, density {:.2}, avg length {:.2}",
            metrics.total_words,
            metrics.unique_words,
            metrics.lexical_density,
            metrics.avg_word_length
        )?;
        writeln!(self.writer, "kireji: {}", list_or_none(&metrics.cutting_markers))?;
        writeln!(self.writer, "kigo: {}", list_or_none(&metrics.season_words))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
