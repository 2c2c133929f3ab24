//! CLI implementation for `armemus templates` commands

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::output::{print_detail, print_success};
use crate::core::board::BoardFamily;
use crate::core::plan::plan_export;
use crate::infra::filesystem::{DiskExecutor, FsExecutor};
use crate::infra::templates::builtin_tree;

/// Write the built-in templates under `dir`
pub fn export(dir: &Path, force: bool) -> Result<()> {
    if !force {
        for family in BoardFamily::all() {
            let target = dir.join(family.template_subdir());
            if target.exists() {
                bail!(
                    "{} already exists. Use --force to replace the template files",
                    target.display()
                );
            }
        }
    }

    let mut executor = DiskExecutor::new();
    for family in BoardFamily::all() {
        let ops = plan_export(dir, family, &builtin_tree(family));
        executor
            .execute(&ops)
            .with_context(|| format!("Failed to export {family} templates"))?;
    }

    print_success(&format!("Exported templates to {}", dir.display()));
    for family in BoardFamily::all() {
        print_detail(&dir.join(family.template_subdir()).display().to_string());
    }
    Ok(())
}
