//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use hokku_core::Metrics;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs analyses as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<AnalysisRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// File path or `<stdin>`
    pub source: String,
    pub metrics: Metrics,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_metrics(&mut self, source: &str, metrics: &Metrics) -> Result<()> {
        self.records.push(AnalysisRecord {
            source: source.to_string(),
            metrics: metrics.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
