//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use hokku_core::domain::lexicon::{default_lexicon, Season};
use std::io::{self, Write};

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(subcommand, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the requested listing to `out`
pub fn write_listing<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    let lexicon = default_lexicon();

    match subcommand {
        ListCommands::SeasonWords => {
            writeln!(out, "Built-in season words:")?;
            for season in Season::ALL {
                let words = lexicon.season_words.words(season);
                writeln!(out, "  {:<10} {}", format!("{season}:"), words.join(", "))?;
            }
        }
        ListCommands::CuttingMarkers => {
            writeln!(out, "Built-in cutting markers:")?;
            for marker in &lexicon.cutting_words.markers {
                writeln!(out, "  {marker}")?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(out, "  {:<10} - {}", format.name(), format.description())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(subcommand: ListCommands) -> String {
        let mut buffer = Vec::new();
        write_listing(subcommand, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_season_words_grouped() {
        let out = listing(ListCommands::SeasonWords);
        assert!(out.contains("spring:"));
        assert!(out.contains("universal:"));
        assert!(out.contains("cherry"));
        assert!(out.contains("full moon"));
    }

    #[test]
    fn test_cutting_markers() {
        let out = listing(ListCommands::CuttingMarkers);
        assert!(out.lines().any(|line| line.trim() == "kana"));
        assert!(out.lines().any(|line| line.trim() == "—"));
    }

    #[test]
    fn test_formats() {
        let out = listing(ListCommands::Formats);
        for name in ["text", "json", "markdown"] {
            assert!(out.contains(name), "missing {name}");
        }
    }
}
