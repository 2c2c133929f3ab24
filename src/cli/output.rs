//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars,
//! status-prefixed messages and JSON results to the user.

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output settings derived from CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Install this configuration for the rest of the process
    ///
    /// Only the first call has an effect.
    pub fn apply_global(self) {
        let _ = OUTPUT.set(self);
    }

    /// The installed configuration, or the default
    pub fn current() -> Self {
        OUTPUT.get().copied().unwrap_or_default()
    }

    /// Tracing level implied by the verbosity flag
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Whether human-readable text should be printed
    pub fn shows_text(&self) -> bool {
        !self.quiet && !self.json
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if OutputConfig::current().shows_text() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print an indented detail line under a previous message
pub fn print_detail(message: &str) {
    if OutputConfig::current().shows_text() {
        println!("  {message}");
    }
}

/// Print an informational message
pub fn print_info(message: &str) {
    if OutputConfig::current().shows_text() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    if !OutputConfig::current().quiet {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print a value as pretty JSON when `--json` is active
///
/// Returns `true` if the value was printed.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<bool> {
    if !OutputConfig::current().json {
        return Ok(false);
    }
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(true)
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Create a progress bar for copied template files
///
/// The bar is hidden in quiet and JSON modes.
pub fn create_copy_bar(total: u64) -> ProgressBar {
    if !OutputConfig::current().shows_text() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}
