//! Project identity and on-disk layout

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::config::defaults::{BUILD_DIR, PROJECT_FILE_EXT, TIVA_FILES_DIR};
use crate::error::ProjectError;

/// Characters that cannot appear in a project name on any supported platform
fn forbidden_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid regex"))
}

/// Validate a project name
///
/// The name becomes a directory name and a file stem, so it must be a
/// single path component.
pub fn validate_name(name: &str) -> Result<(), ProjectError> {
    if name.is_empty() {
        return Err(ProjectError::EmptyName);
    }

    let invalid = |reason: &str| ProjectError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name == "." || name == ".." {
        return Err(invalid("reserved directory name"));
    }
    if name.trim() != name {
        return Err(invalid("leading or trailing whitespace"));
    }
    if let Some(m) = forbidden_chars().find(name) {
        return Err(invalid(&format!("contains forbidden character {:?}", m.as_str())));
    }
    Ok(())
}

/// Information collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    /// Project name
    pub name: String,

    /// Directory the project folder is created in
    pub path: PathBuf,

    /// 1-based board selection index (0 means no board)
    pub board_index: usize,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, board_index: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            board_index,
        }
    }

    /// Zero-based position of the selected board in the catalog
    pub fn catalog_index(&self) -> Option<usize> {
        self.board_index.checked_sub(1)
    }

    /// Check the inputs required to create a project
    pub fn validate(&self) -> Result<(), ProjectError> {
        validate_name(&self.name)?;
        if self.path.as_os_str().is_empty() {
            return Err(ProjectError::EmptyPath);
        }
        if self.board_index == 0 {
            return Err(ProjectError::NoBoardSelected);
        }
        Ok(())
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.path, &self.name)
    }
}

/// Paths that make up a project on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: String,
    project_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(location: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            project_dir: location.join(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<location>/<name>`
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `<location>/<name>/<name>.apf`
    pub fn apf_path(&self) -> PathBuf {
        self.project_dir.join(format!("{}{PROJECT_FILE_EXT}", self.name))
    }

    /// `<location>/<name>/Build`
    pub fn build_dir(&self) -> PathBuf {
        self.project_dir.join(BUILD_DIR)
    }

    /// Sub-directories owned by a previous project, removed on overwrite
    pub fn owned_dirs(&self) -> [PathBuf; 3] {
        [
            self.project_dir.join(BUILD_DIR),
            self.project_dir.join(&self.name),
            self.project_dir.join(TIVA_FILES_DIR),
        ]
    }
}

/// A project that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedProject {
    info: ProjectInfo,
    board: String,
    apf_path: PathBuf,
    main_source: Option<PathBuf>,
}

impl CreatedProject {
    pub fn new(
        info: ProjectInfo,
        board: impl Into<String>,
        apf_path: PathBuf,
        main_source: Option<PathBuf>,
    ) -> Self {
        Self {
            info,
            board: board.into(),
            apf_path,
            main_source,
        }
    }

    pub fn info(&self) -> &ProjectInfo {
        &self.info
    }

    /// Name of the selected board
    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn apf_path(&self) -> &Path {
        &self.apf_path
    }

    /// Path of the renamed template file, if the template had one
    pub fn main_source(&self) -> Option<&Path> {
        self.main_source.as_deref()
    }
}
