//! Markdown output formatter

use super::{list_or_none, pattern, OutputFormatter};
use anyhow::Result;
use hokku_core::Metrics;
use std::io::Write;

/// Markdown formatter - outputs one section with a line table per poem
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    poem_count: usize,
    valid_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            poem_count: 0,
            valid_count: 0,
        }
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_metrics(&mut self, source: &str, metrics: &Metrics) -> Result<()> {
        self.poem_count += 1;
        if metrics.valid_575 {
            self.valid_count += 1;
        }

        writeln!(self.writer, "## {}", escape_cell(source))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Line | Text | Syllables | Words |")?;
        writeln!(self.writer, "|------|------|-----------|-------|")?;
        for (i, line) in metrics.lines.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                i + 1,
                escape_cell(line),
                metrics.line_syllables[i],
                metrics.line_words[i]
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- **Pattern**: {} ({})",
            pattern(&metrics.line_syllables),
            if metrics.valid_575 { "valid" } else { "invalid" }
        )?;
        writeln!(self.writer, "- **Tolerance**: {}", metrics.tolerance)?;
        writeln!(
            self.writer,
            "- **Lexical density**: {:.2}",
            metrics.lexical_density
        )?;
        writeln!(
            self.writer,
            "- **Kireji**: {}",
            list_or_none(&metrics.cutting_markers)
        )?;
        writeln!(self.writer, "- **Kigo**: {}", list_or_none(&metrics.season_words))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total poems: {} ({} valid 5-7-5)*",
            self.poem_count, self.valid_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
