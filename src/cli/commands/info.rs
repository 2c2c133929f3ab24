//! CLI implementation for `armemus info` command

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_json, print_success};
use crate::core::apf::ProjectFile;
use crate::infra::filesystem::read_file;

/// Execute the info command
pub fn execute(file: &Path) -> Result<()> {
    let content = read_file(file)?;
    let project = ProjectFile::parse(&content)
        .with_context(|| format!("Failed to parse project file {}", file.display()))?;

    if print_json(&project)? {
        return Ok(());
    }

    print_success(&format!("Project file {}", file.display()));
    print_detail(&format!("Warnings: {}", join_or_none(&project.warnings)));
    print_detail(&format!("Optimization: {}", join_or_none(&project.optimizations)));
    Ok(())
}

fn join_or_none(options: &[String]) -> String {
    if options.is_empty() {
        "(none)".to_string()
    } else {
        options.join(" ")
    }
}
