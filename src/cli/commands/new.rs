//! CLI implementation for `armemus new` command
//!
//! Missing inputs are collected through the interactive wizard when stdin
//! is a terminal. An existing project is resolved by `--overwrite`,
//! `--keep-existing`, or by asking.

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};

use crate::cli::commands::NewArgs;
use crate::cli::output::{
    create_copy_bar, print_detail, print_info, print_json, print_success, print_warning,
};
use crate::cli::prompt::Prompter;
use crate::core::create::{ConflictResolver, CreateOutcome, ProjectCreator, Resolution};
use crate::core::global_config::GlobalConfig;
use crate::core::plan::FsOp;
use crate::core::project::{CreatedProject, ProjectInfo};
use crate::core::wizard::Wizard;
use crate::error::ProjectError;
use crate::infra::dirs::ArmemusDirs;
use crate::infra::filesystem::{DiskExecutor, RecordingExecutor};

/// Execute the new command
pub fn execute(args: NewArgs) -> Result<()> {
    let dirs = ArmemusDirs::new();
    let config = GlobalConfig::load(&dirs).with_context(|| "Failed to load global configuration")?;
    let catalog = config.catalog();
    let templates = config.template_source(&dirs, args.templates.as_deref());
    tracing::info!("Using templates: {:?}", templates);

    let mut wizard = Wizard::new(catalog.clone(), config.default_location());
    if let Some(name) = &args.name {
        wizard.set_name(name.clone());
    }
    if let Some(path) = &args.path {
        wizard.set_location(path);
    }
    if let Some(selector) = &args.board {
        wizard.select_board(catalog.resolve(selector)?);
    }

    let interactive = std::io::stdin().is_terminal();
    let fixed = if args.overwrite {
        Some(Resolution::Overwrite)
    } else if args.keep_existing || !interactive {
        Some(Resolution::Abort)
    } else {
        None
    };

    let creator = ProjectCreator::new(&catalog, &templates);
    let mut prompter = Prompter::stdio();
    let mut use_wizard = !wizard.can_finish();

    loop {
        let info = if use_wizard {
            if !interactive {
                bail!(missing_inputs(&wizard));
            }
            match prompter.run_wizard(&mut wizard)? {
                Some(info) => info,
                None => {
                    print_info("Cancelled");
                    return Ok(());
                }
            }
        } else {
            wizard.finish()?
        };

        let outcome = {
            let mut answer = fixed;
            let resolver: &mut dyn ConflictResolver = match answer.as_mut() {
                Some(resolution) => resolution,
                None => &mut prompter,
            };
            run(&creator, &info, resolver, args.dry_run)?
        };

        match outcome {
            CreateOutcome::Created(project) => {
                wizard.close();
                return report(&project, args.dry_run);
            }
            CreateOutcome::Dismissed => {
                print_warning(&format!(
                    "{} already exists, nothing written",
                    info.layout().apf_path().display()
                ));
                return Ok(());
            }
            CreateOutcome::Aborted if interactive && fixed.is_none() => {
                wizard.return_to_location();
                use_wizard = true;
            }
            CreateOutcome::Aborted => {
                let path = info.layout().apf_path();
                return Err(ProjectError::ProjectExists { path }).with_context(|| {
                    if args.overwrite || args.keep_existing {
                        "Refusing to replace the existing project".to_string()
                    } else {
                        "Pass --overwrite to replace it".to_string()
                    }
                });
            }
        }
    }
}

/// Describe what is missing for a non-interactive run
fn missing_inputs(wizard: &Wizard) -> String {
    let mut missing = Vec::new();
    if wizard.name().is_empty() {
        missing.push("a project name");
    }
    if !wizard.catalog().selection_enables_finish(wizard.board_index()) {
        missing.push("--board");
    }
    format!(
        "Missing {} (stdin is not a terminal, so the wizard cannot prompt)",
        missing.join(" and ")
    )
}

fn run(
    creator: &ProjectCreator<'_>,
    info: &ProjectInfo,
    resolver: &mut dyn ConflictResolver,
    dry_run: bool,
) -> Result<CreateOutcome> {
    let prepared = creator.prepare(info)?;

    if dry_run {
        let mut recorder = RecordingExecutor::default();
        let outcome = ProjectCreator::apply(prepared, resolver, &mut recorder)?;
        print_plan(&recorder.ops)?;
        return Ok(outcome);
    }

    let bar = create_copy_bar(prepared.plan.file_count() as u64);
    bar.set_message(info.name.clone());

    let mut executor = DiskExecutor::with_observer(|op: &FsOp| {
        if matches!(op, FsOp::WriteFile { .. } | FsOp::CopyFile { .. }) {
            bar.inc(1);
        }
    });
    let outcome = ProjectCreator::apply(prepared, resolver, &mut executor)
        .with_context(|| format!("Failed to create project '{}'", info.name));
    bar.finish_and_clear();
    outcome
}

fn print_plan(ops: &[FsOp]) -> Result<()> {
    if print_json(&ops)? {
        return Ok(());
    }
    print_info("Dry run, planned operations:");
    for op in ops {
        print_detail(&op.to_string());
    }
    Ok(())
}

fn report(project: &CreatedProject, dry_run: bool) -> Result<()> {
    if dry_run {
        return Ok(());
    }
    if print_json(project)? {
        return Ok(());
    }

    let info = project.info();
    print_success(&format!(
        "Created project '{}' in {}",
        info.name,
        info.layout().project_dir().display()
    ));
    print_detail(&format!("Board: {}", project.board()));
    print_detail(&format!("Project file: {}", project.apf_path().display()));
    if let Some(main) = project.main_source() {
        print_detail(&format!("Main source: {}", main.display()));
    }
    Ok(())
}
