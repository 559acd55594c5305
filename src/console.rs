//! Console plumbing for the binaries.
//!
//! Stdout is the demonstration transcript and is always plain text. Colour
//! is only used for the failure report on stderr.

use crate::error::{DemoError, Result};
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Writes a narration line (`Client: ...`, `App: ...`).
pub fn banner<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}")?;
    Ok(())
}

/// Blank line between two demonstration runs.
pub fn separator<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    Ok(())
}

/// The line a binary prints to stderr before exiting with a failure code.
pub fn error_report(err: &DemoError) -> String {
    let prefix: ColoredString = "error:".red().bold();
    format!("{prefix} {err}")
}
