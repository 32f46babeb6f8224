//! Standard input handling

use crate::error::CliError;
use anyhow::Result;
use std::io::{self, IsTerminal};

/// Fail unless stdin is redirected from a file or pipe
///
/// Reading an interactive terminal would block waiting for the user,
/// so analysis without input files requires piped text.
pub fn ensure_piped() -> Result<io::Stdin> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(CliError::NoInput.into());
    }
    Ok(stdin)
}
