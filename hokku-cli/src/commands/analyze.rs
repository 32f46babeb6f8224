//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{ensure_piped, resolve_patterns};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use hokku_core::{Input, PoemProcessor};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Source label used for piped input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the analyze command
#[derive(Debug, Default, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Split single-line input on separators or punctuation
    #[arg(short, long)]
    pub autosplit: bool,

    /// Disable autosplit even if the config file enables it
    #[arg(long, conflicts_with = "autosplit")]
    pub no_autosplit: bool,

    /// Allowed per-line syllable deviation from 5-7-5
    #[arg(short, long, value_name = "N")]
    pub tolerance: Option<u32>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "HOKKU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output and log only errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting haiku analysis");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let processor = PoemProcessor::with_config(settings.core_config()?)?;
        log::debug!(
            "Tolerance {}, autosplit {}",
            settings.analysis.tolerance,
            settings.analysis.autosplit
        );

        if self.input.is_empty() {
            let stdin = ensure_piped()?;
            let metrics = processor
                .process(Input::from_reader(stdin))
                .context("Failed to analyze stdin")?;
            let mut formatter =
                self.create_formatter(settings.output.format, settings.output.pretty_json)?;
            formatter.format_metrics(STDIN_SOURCE, &metrics)?;
            formatter.finish()?;
            return Ok(());
        }

        // Inputs are resolved before the output file is created or truncated
        let files = self.input_files()?;
        let mut formatter =
            self.create_formatter(settings.output.format, settings.output.pretty_json)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut failed = 0usize;
        for path in &files {
            let source = path.display().to_string();
            match processor.process(Input::from_file(path)) {
                Ok(metrics) => formatter.format_metrics(&source, &metrics)?,
                Err(e) => {
                    log::error!("Failed to analyze {source}: {e}");
                    failed += 1;
                }
            }
            progress.file_completed(&source);
        }

        progress.finish();
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::AnalysisFailed {
                failed,
                total: files.len(),
            }
            .into());
        }

        log::info!("Analyzed {} poem(s)", files.len());
        Ok(())
    }

    /// Config file values with command-line flags applied on top
    pub fn settings(&self) -> Result<CliConfig> {
        let mut settings = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(tolerance) = self.tolerance {
            settings.analysis.tolerance = tolerance;
        }
        if self.autosplit {
            settings.analysis.autosplit = true;
        }
        if self.no_autosplit {
            settings.analysis.autosplit = false;
        }
        if let Some(format) = self.format {
            settings.output.format = format;
        }

        Ok(settings)
    }

    /// Resolved input files, excluding the output file
    fn input_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = resolve_patterns(&self.input)?;

        let Some(output) = self.output.as_deref().and_then(canonical) else {
            return Ok(files);
        };

        let before = files.len();
        files.retain(|path| canonical(path).as_ref() != Some(&output));
        if files.len() < before {
            log::warn!(
                "Skipping output file {} matched by the input patterns",
                output.display()
            );
        }
        if files.is_empty() {
            return Err(CliError::OutputIsInput(output.display().to_string()).into());
        }

        Ok(files)
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                format.formatter(BufWriter::new(file), pretty_json)
            }
            None => format.formatter(io::stdout(), pretty_json),
        };
        Ok(formatter)
    }

    /// Default log filter for the verbosity flags
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        // Already initialized when run more than once in one process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }
}

fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}
