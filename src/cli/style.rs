//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escapes when stdout is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark prefix for success lines
pub const CHECK: &str = "✓";

/// Cross prefix for skipped PRs
pub const CROSS: &str = "✗";

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// De-emphasized detail text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Headings and labels
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Identifiers such as PR references
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Successful results
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Non-fatal problems
    fn warn(&self) -> String {
        self.yellow().to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Yellow cross
pub fn cross() -> String {
    CROSS.warn()
}
