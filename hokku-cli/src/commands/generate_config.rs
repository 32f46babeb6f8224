//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Configuration template with every option at its default
pub const TEMPLATE: &str = r#"# hokku configuration

[analysis]
# Allowed per-line deviation from 5-7-5 (0 = exact)
tolerance = 0

# Split single-line input on " / ", "|", dashes or punctuation
autosplit = false

# Extra markers, added to the built-in lists
[markers]
# Example: season_words = ["hanami", "tsuyu"]
season_words = []

# Example: cutting_markers = ["~"]
cutting_markers = []

[output]
# One of: text, json, markdown
format = "text"

# Indent JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust the analysis");
        println!("2. Validate your configuration:");
        println!("   hokku validate --config {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   hokku analyze -i poem.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("hokku.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("hokku.toml"));
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = CliConfig::from_toml(TEMPLATE).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("hokku.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[analysis]"));
        assert!(CliConfig::from_file(&output_path).is_ok());
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/hokku.toml"),
        };
        assert!(args.execute().is_err());
    }
}
