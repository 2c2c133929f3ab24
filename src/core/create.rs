//! Project creation workflow
//!
//! Validates the wizard's [`ProjectInfo`], resolves an existing project
//! through a [`ConflictResolver`], then applies the planned operations
//! through an [`FsExecutor`].

use std::path::Path;

use crate::core::apf::ProjectFile;
use crate::core::board::{Board, BoardCatalog};
use crate::core::plan::{plan_clear, plan_create, CreatePlan, FsOp};
use crate::core::project::{CreatedProject, ProjectInfo};
use crate::error::ArmemusError;
use crate::infra::filesystem::FsExecutor;
use crate::infra::templates::TemplateSource;

/// Answer to "project already exists, overwrite it?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Clear the previous project and write the new one
    Overwrite,
    /// Write nothing and go back to the location step
    Abort,
    /// Write nothing and stay put
    Dismiss,
}

/// Decides what to do when a project file already exists
pub trait ConflictResolver {
    fn resolve(&mut self, apf_path: &Path) -> Resolution;
}

/// A fixed answer
impl ConflictResolver for Resolution {
    fn resolve(&mut self, _apf_path: &Path) -> Resolution {
        *self
    }
}

/// Result of a creation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Project written
    Created(CreatedProject),
    /// User declined to overwrite an existing project
    Aborted,
    /// User dismissed the overwrite question
    Dismissed,
}

/// Operations a creation would perform, before conflict resolution
#[derive(Debug, Clone)]
pub struct PreparedProject<'c> {
    pub info: ProjectInfo,
    pub board: &'c Board,
    pub plan: CreatePlan,
    /// Clear operations, present when a project file already exists
    pub conflict: Option<Vec<FsOp>>,
}

/// Creates projects from a board catalog and a template source
#[derive(Debug, Clone)]
pub struct ProjectCreator<'a> {
    catalog: &'a BoardCatalog,
    templates: &'a TemplateSource,
    project_file: ProjectFile,
}

impl<'a> ProjectCreator<'a> {
    pub fn new(catalog: &'a BoardCatalog, templates: &'a TemplateSource) -> Self {
        Self {
            catalog,
            templates,
            project_file: ProjectFile::default(),
        }
    }

    /// Validate inputs and compute the operations without writing anything
    pub fn prepare(&self, info: &ProjectInfo) -> Result<PreparedProject<'a>, ArmemusError> {
        info.validate()?;
        let board = self.catalog.get(info.board_index)?;
        let tree = self.templates.load(board.family)?;

        let layout = info.layout();
        let plan = plan_create(&layout, board.family, &tree, &self.project_file);
        let conflict = layout.apf_path().exists().then(|| plan_clear(&layout));

        tracing::info!(
            "Planned project '{}' for {} ({} operations)",
            info.name,
            board.name,
            plan.ops.len()
        );

        Ok(PreparedProject {
            info: info.clone(),
            board,
            plan,
            conflict,
        })
    }

    /// Create the project
    pub fn create(
        &self,
        info: &ProjectInfo,
        resolver: &mut dyn ConflictResolver,
        executor: &mut dyn FsExecutor,
    ) -> Result<CreateOutcome, ArmemusError> {
        let prepared = self.prepare(info)?;
        Self::apply(prepared, resolver, executor)
    }

    /// Resolve the conflict of a prepared project, then write it
    pub fn apply(
        prepared: PreparedProject<'_>,
        resolver: &mut dyn ConflictResolver,
        executor: &mut dyn FsExecutor,
    ) -> Result<CreateOutcome, ArmemusError> {
        let layout = prepared.info.layout();

        if let Some(clear_ops) = &prepared.conflict {
            let resolution = resolver.resolve(&layout.apf_path());
            tracing::info!("Existing project {}: {:?}", layout.apf_path().display(), resolution);
            match resolution {
                Resolution::Overwrite => executor.execute(clear_ops)?,
                Resolution::Abort => return Ok(CreateOutcome::Aborted),
                Resolution::Dismiss => return Ok(CreateOutcome::Dismissed),
            }
        }

        executor.execute(&prepared.plan.ops)?;
        tracing::info!("Created project {}", layout.project_dir().display());

        Ok(CreateOutcome::Created(CreatedProject::new(
            prepared.info,
            prepared.board.name.clone(),
            layout.apf_path(),
            prepared.plan.main_source,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectError;
    use crate::infra::filesystem::{DiskExecutor, RecordingExecutor};
    use tempfile::TempDir;

    /// Resolver that panics if asked
    struct NoConflictExpected;

    impl ConflictResolver for NoConflictExpected {
        fn resolve(&mut self, apf_path: &Path) -> Resolution {
            panic!("unexpected conflict for {}", apf_path.display());
        }
    }

    fn create(
        location: &Path,
        name: &str,
        board: usize,
        resolver: &mut dyn ConflictResolver,
    ) -> Result<CreateOutcome, ArmemusError> {
        let catalog = BoardCatalog::builtin();
        let templates = TemplateSource::Builtin;
        ProjectCreator::new(&catalog, &templates).create(
            &ProjectInfo::new(name, location, board),
            resolver,
            &mut DiskExecutor::new(),
        )
    }

    fn created(outcome: CreateOutcome) -> CreatedProject {
        match outcome {
            CreateOutcome::Created(project) => project,
            other => panic!("expected a created project, got {other:?}"),
        }
    }

    #[test]
    fn test_create_in_new_location() {
        let temp = TempDir::new().unwrap();
        let location = temp.path().join("does/not/exist");

        let project = created(create(&location, "blink", 1, &mut NoConflictExpected).unwrap());

        let dir = location.join("blink");
        assert!(dir.join("Build").is_dir());
        let apf = std::fs::read_to_string(dir.join("blink.apf")).unwrap();
        assert!(ProjectFile::parse(&apf).is_ok());
        assert_eq!(project.apf_path(), dir.join("blink.apf"));
        assert_eq!(project.board(), "Arduino Due");
        assert_eq!(project.info().catalog_index(), Some(0));
    }

    #[test]
    fn test_arduino_main_source_is_ino() {
        let temp = TempDir::new().unwrap();
        let project = created(create(temp.path(), "blink", 3, &mut NoConflictExpected).unwrap());

        let main = temp.path().join("blink/blink/blink.ino");
        assert_eq!(project.main_source(), Some(main.as_path()));
        assert!(std::fs::read_to_string(&main).unwrap().contains("void setup()"));
    }

    #[test]
    fn test_tiva_main_source_is_cpp() {
        let temp = TempDir::new().unwrap();
        let project = created(create(temp.path(), "motor", 4, &mut NoConflictExpected).unwrap());

        let dir = temp.path().join("motor");
        assert_eq!(project.main_source(), Some(dir.join("motor.cpp").as_path()));
        assert!(dir.join("Tiva Files/startup_gcc.c").is_file());
        assert!(dir.join("Tiva Files/tm4c123gh6pm.ld").is_file());
    }

    #[test]
    fn test_invalid_inputs_write_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            create(temp.path(), "blink", 0, &mut NoConflictExpected),
            Err(ArmemusError::Project(ProjectError::NoBoardSelected))
        ));
        assert!(matches!(
            create(temp.path(), "", 1, &mut NoConflictExpected),
            Err(ArmemusError::Project(ProjectError::EmptyName))
        ));
        assert!(matches!(
            create(temp.path(), "blink", 9, &mut NoConflictExpected),
            Err(ArmemusError::Project(ProjectError::BoardOutOfRange { .. }))
        ));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_overwrite_clears_owned_artifacts_only() {
        let temp = TempDir::new().unwrap();
        create(temp.path(), "blink", 4, &mut NoConflictExpected).unwrap();

        let dir = temp.path().join("blink");
        std::fs::write(dir.join("Build/stale.o"), "old").unwrap();
        std::fs::create_dir_all(dir.join("blink")).unwrap();
        std::fs::write(dir.join("blink/old.ino"), "old").unwrap();
        std::fs::write(dir.join("Tiva Files/extra.c"), "old").unwrap();
        std::fs::write(dir.join("notes.txt"), "keep me").unwrap();

        let outcome = create(temp.path(), "blink", 1, &mut Resolution::Overwrite).unwrap();
        assert!(matches!(outcome, CreateOutcome::Created(_)));

        assert!(!dir.join("Build/stale.o").exists());
        assert!(!dir.join("blink/old.ino").exists());
        assert!(!dir.join("Tiva Files").exists());
        assert!(dir.join("blink/blink.ino").is_file());
        assert_eq!(std::fs::read_to_string(dir.join("notes.txt")).unwrap(), "keep me");
    }

    #[test]
    fn test_abort_and_dismiss_leave_project_untouched() {
        let temp = TempDir::new().unwrap();
        create(temp.path(), "blink", 1, &mut NoConflictExpected).unwrap();
        let apf = temp.path().join("blink/blink.apf");
        std::fs::write(&apf, "edited").unwrap();

        assert_eq!(
            create(temp.path(), "blink", 4, &mut Resolution::Abort).unwrap(),
            CreateOutcome::Aborted
        );
        assert_eq!(
            create(temp.path(), "blink", 4, &mut Resolution::Dismiss).unwrap(),
            CreateOutcome::Dismissed
        );

        assert_eq!(std::fs::read_to_string(&apf).unwrap(), "edited");
        assert!(!temp.path().join("blink/Tiva Files").exists());
    }

    #[test]
    fn test_dry_run_records_clear_before_create() {
        let temp = TempDir::new().unwrap();
        create(temp.path(), "blink", 1, &mut NoConflictExpected).unwrap();

        let catalog = BoardCatalog::builtin();
        let templates = TemplateSource::Builtin;
        let mut recorder = RecordingExecutor::default();
        ProjectCreator::new(&catalog, &templates)
            .create(
                &ProjectInfo::new("blink", temp.path(), 1),
                &mut Resolution::Overwrite,
                &mut recorder,
            )
            .unwrap();

        assert_eq!(
            recorder.ops[0],
            FsOp::RemoveFile {
                path: temp.path().join("blink/blink.apf")
            }
        );
        assert!(recorder
            .ops
            .iter()
            .any(|op| matches!(op, FsOp::WriteFile { path, .. } if path.ends_with("blink.apf"))));
        // Nothing was removed on disk
        assert!(temp.path().join("blink/blink/blink.ino").is_file());
    }

    #[test]
    fn test_prepare_reports_conflict() {
        let temp = TempDir::new().unwrap();
        let catalog = BoardCatalog::builtin();
        let templates = TemplateSource::Builtin;
        let creator = ProjectCreator::new(&catalog, &templates);
        let info = ProjectInfo::new("blink", temp.path(), 2);

        assert!(creator.prepare(&info).unwrap().conflict.is_none());
        create(temp.path(), "blink", 2, &mut NoConflictExpected).unwrap();
        let prepared = creator.prepare(&info).unwrap();
        assert_eq!(prepared.conflict.map(|ops| ops.len()), Some(4));
        assert_eq!(prepared.board.name, "Arduino Zero");
    }

    #[test]
    fn test_apply_uses_conflict_found_by_prepare() {
        let temp = TempDir::new().unwrap();
        let catalog = BoardCatalog::builtin();
        let templates = TemplateSource::Builtin;
        let creator = ProjectCreator::new(&catalog, &templates);
        let info = ProjectInfo::new("blink", temp.path(), 1);

        let prepared = creator.prepare(&info).unwrap();
        let file_count = prepared.plan.file_count();
        let mut recorder = RecordingExecutor::default();
        let outcome =
            ProjectCreator::apply(prepared, &mut NoConflictExpected, &mut recorder).unwrap();

        assert!(matches!(outcome, CreateOutcome::Created(_)));
        let written = recorder
            .ops
            .iter()
            .filter(|op| matches!(op, FsOp::WriteFile { .. } | FsOp::CopyFile { .. }))
            .count();
        assert_eq!(written, file_count);
    }

    #[test]
    fn test_missing_template_root_fails_before_writing() {
        let temp = TempDir::new().unwrap();
        let catalog = BoardCatalog::builtin();
        let templates = TemplateSource::Directory(temp.path().join("no-templates"));
        let result = ProjectCreator::new(&catalog, &templates).create(
            &ProjectInfo::new("blink", temp.path(), 1),
            &mut NoConflictExpected,
            &mut DiskExecutor::new(),
        );

        assert!(matches!(
            result,
            Err(ArmemusError::Project(ProjectError::TemplateNotFound { .. }))
        ));
        assert!(!temp.path().join("blink").exists());
    }
}
