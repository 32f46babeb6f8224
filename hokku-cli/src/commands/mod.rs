//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze haiku from files or stdin
    Analyze(analyze::AnalyzeArgs),

    /// List built-in markers and output formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List built-in season words (kigo) grouped by season
    SeasonWords,

    /// List built-in cutting markers (kireji)
    CuttingMarkers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_analyze_flags() {
        let cli = TestCli::try_parse_from([
            "hokku", "analyze", "-i", "a.txt", "-i", "b.txt", "-a", "-t", "2", "-f", "json", "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.input, vec!["a.txt", "b.txt"]);
                assert!(args.autosplit);
                assert_eq!(args.tolerance, Some(2));
                assert_eq!(args.format, Some(crate::output::OutputFormat::Json));
                assert_eq!(args.verbose, 2);
                assert!(!args.quiet);
            }
            other => panic!("Expected Analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_subcommands() {
        for (name, expected) in [
            ("season-words", ListCommands::SeasonWords),
            ("cutting-markers", ListCommands::CuttingMarkers),
            ("formats", ListCommands::Formats),
        ] {
            let cli = TestCli::try_parse_from(["hokku", "list", name]).unwrap();
            match cli.command {
                Commands::List { subcommand } => assert_eq!(subcommand, expected),
                other => panic!("Expected List, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_generate_config() {
        let cli = TestCli::try_parse_from(["hokku", "generate-config", "-o", "hokku.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(TestCli::try_parse_from(["hokku", "analyze", "-f", "yaml"]).is_err());
    }

    #[test]
    fn test_autosplit_flags_conflict() {
        assert!(TestCli::try_parse_from(["hokku", "analyze", "-a", "--no-autosplit"]).is_err());

        let cli = TestCli::try_parse_from(["hokku", "analyze", "--no-autosplit"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => assert!(args.no_autosplit && !args.autosplit),
            other => panic!("Expected Analyze, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_requires_config() {
        assert!(TestCli::try_parse_from(["hokku", "validate"]).is_err());
    }
}
