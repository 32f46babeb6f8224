//! Line reconciliation: arbitrary text into three candidate lines
//!
//! Strategies are tried in a fixed order and the first one that yields
//! enough lines wins:
//!
//! 1. newline-separated input (`multiline`)
//! 2. explicit inline separators such as `" / "` (`autosplit:<sep>`)
//! 3. runs of major punctuation (`autosplit:punct`)
//!
//! Reconciliation only regroups existing text. Whether the result has
//! exactly three lines is for the caller to check.

use crate::domain::LINE_COUNT;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Inline separators in priority order
pub const SEPARATORS: [&str; 7] = [" / ", "/", " | ", " |", "| ", " — ", " – "];

static PUNCTUATION_RUN: OnceLock<Regex> = OnceLock::new();

fn punctuation_run() -> &'static Regex {
    PUNCTUATION_RUN
        .get_or_init(|| Regex::new(r"[.!?;:—–…]+").expect("punctuation pattern is valid"))
}

/// Which reconciliation strategy produced the lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Newline-separated input with at least three non-empty lines
    Multiline,
    /// Lines taken as-is (autosplit disabled or nothing else worked)
    Raw,
    /// Split on one of [`SEPARATORS`]
    Separator(&'static str),
    /// Split on runs of major punctuation
    Punctuation,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Multiline => write!(f, "multiline"),
            Strategy::Raw => write!(f, "raw"),
            Strategy::Separator(sep) => write!(f, "autosplit:{sep}"),
            Strategy::Punctuation => write!(f, "autosplit:punct"),
        }
    }
}

/// Lines produced by reconciliation plus the strategy that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub lines: Vec<String>,
    pub strategy: Strategy,
}

impl Reconciled {
    fn new(lines: Vec<String>, strategy: Strategy) -> Self {
        log::debug!(
            "Reconciled input into {} line(s) using {}",
            lines.len(),
            strategy
        );
        Self { lines, strategy }
    }

    /// True when exactly three lines were obtained
    pub fn is_complete(&self) -> bool {
        self.lines.len() == LINE_COUNT
    }
}

/// Turns raw text into candidate poem lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LineReconciler {
    autosplit: bool,
}

impl LineReconciler {
    pub fn new(autosplit: bool) -> Self {
        Self { autosplit }
    }

    pub fn autosplit(&self) -> bool {
        self.autosplit
    }

    /// Reconcile `text` into at most three lines
    pub fn reconcile(&self, text: &str) -> Reconciled {
        let trimmed = text.trim();

        let mut lines = non_empty_lines(trimmed);
        if lines.len() >= LINE_COUNT {
            lines.truncate(LINE_COUNT);
            return Reconciled::new(lines, Strategy::Multiline);
        }

        if !self.autosplit {
            return Reconciled::new(lines, Strategy::Raw);
        }

        for sep in SEPARATORS {
            if !trimmed.contains(sep) {
                continue;
            }
            let segments: Vec<String> = trimmed
                .split(sep)
                .map(|segment| segment.trim().to_string())
                .collect();
            if segments.len() == LINE_COUNT {
                return Reconciled::new(segments, Strategy::Separator(sep));
            }
            log::trace!(
                "Separator {:?} gave {} segments, trying next",
                sep,
                segments.len()
            );
        }

        let mut segments: Vec<String> = punctuation_run()
            .split(trimmed)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        if segments.len() >= LINE_COUNT {
            segments.truncate(LINE_COUNT);
            return Reconciled::new(segments, Strategy::Punctuation);
        }

        Reconciled::new(lines, Strategy::Raw)
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
