//! Filesystem operation planning
//!
//! Creating or clearing a project is expressed as an ordered list of
//! [`FsOp`]s computed without touching the filesystem. The operations are
//! applied by an executor in [`crate::infra::filesystem`].

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::TEMPLATE_MARKER;
use crate::core::apf::ProjectFile;
use crate::core::board::BoardFamily;
use crate::core::project::ProjectLayout;

/// A single filesystem operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FsOp {
    /// Create a directory and its parents
    CreateDir { path: PathBuf },
    /// Create or truncate a file with the given contents
    WriteFile { path: PathBuf, contents: String },
    /// Copy a file, replacing the destination
    CopyFile { from: PathBuf, to: PathBuf },
    /// Restrict a file to owner read/write
    SetOwnerReadWrite { path: PathBuf },
    /// Remove a file if present
    RemoveFile { path: PathBuf },
    /// Remove a directory tree if present
    RemoveDirAll { path: PathBuf },
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path } => write!(f, "mkdir   {}", path.display()),
            Self::WriteFile { path, contents } => {
                write!(f, "write   {} ({} bytes)", path.display(), contents.len())
            }
            Self::CopyFile { from, to } => {
                write!(f, "copy    {} -> {}", from.display(), to.display())
            }
            Self::SetOwnerReadWrite { path } => write!(f, "chmod   {} (rw owner)", path.display()),
            Self::RemoveFile { path } => write!(f, "rm      {}", path.display()),
            Self::RemoveDirAll { path } => write!(f, "rm -r   {}", path.display()),
        }
    }
}

/// Where a template file's contents come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A file on disk
    Path(PathBuf),
    /// Contents compiled into the binary
    Inline(String),
}

/// An entry of a template tree, relative to the tree root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry {
    Dir { relative: PathBuf },
    File { relative: PathBuf, source: FileSource },
}

impl TemplateEntry {
    pub fn relative(&self) -> &Path {
        match self {
            Self::Dir { relative } | Self::File { relative, .. } => relative,
        }
    }
}

/// A board family's template tree
///
/// Entries are ordered so that every directory precedes its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTree {
    entries: Vec<TemplateEntry>,
}

impl TemplateTree {
    pub fn new(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TemplateEntry::File { .. }))
            .count()
    }
}

/// Operations that create a project, plus the main source file they produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePlan {
    pub ops: Vec<FsOp>,
    pub main_source: Option<PathBuf>,
}

impl CreatePlan {
    /// Number of files written or copied
    pub fn file_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, FsOp::WriteFile { .. } | FsOp::CopyFile { .. }))
            .count()
    }
}

fn is_marker(component: &OsStr) -> bool {
    component == OsStr::new(TEMPLATE_MARKER)
}

/// Map a template-relative path to its destination-relative path
///
/// Directories named `template` become `<name>`. A file named `template`
/// becomes `<name><ext>`. Everything else keeps its name.
pub fn rename_relative(relative: &Path, is_file: bool, name: &str, ext: &str) -> PathBuf {
    let components: Vec<&OsStr> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    let last = components.len().saturating_sub(1);

    let mut out = PathBuf::new();
    for (i, part) in components.into_iter().enumerate() {
        if is_marker(part) {
            if is_file && i == last {
                out.push(format!("{name}{ext}"));
            } else {
                out.push(name);
            }
        } else {
            out.push(part);
        }
    }
    out
}

/// Plan the creation of a project
pub fn plan_create(
    layout: &ProjectLayout,
    family: BoardFamily,
    tree: &TemplateTree,
    project_file: &ProjectFile,
) -> CreatePlan {
    let project_dir = layout.project_dir().to_path_buf();
    let ext = family.main_source_ext();

    let mut ops = vec![
        FsOp::CreateDir {
            path: project_dir.clone(),
        },
        FsOp::WriteFile {
            path: layout.apf_path(),
            contents: project_file.to_xml(),
        },
        FsOp::CreateDir {
            path: layout.build_dir(),
        },
        FsOp::CreateDir {
            path: project_dir.clone(),
        },
    ];
    let mut main_source = None;

    for entry in tree.entries() {
        match entry {
            TemplateEntry::Dir { relative } => {
                let dest = project_dir.join(rename_relative(relative, false, layout.name(), ext));
                ops.push(FsOp::CreateDir { path: dest });
            }
            TemplateEntry::File { relative, source } => {
                let dest = project_dir.join(rename_relative(relative, true, layout.name(), ext));
                if relative.file_name().is_some_and(is_marker) {
                    main_source = Some(dest.clone());
                }
                ops.push(match source {
                    FileSource::Path(from) => FsOp::CopyFile {
                        from: from.clone(),
                        to: dest.clone(),
                    },
                    FileSource::Inline(contents) => FsOp::WriteFile {
                        path: dest.clone(),
                        contents: contents.clone(),
                    },
                });
                ops.push(FsOp::SetOwnerReadWrite { path: dest });
            }
        }
    }

    CreatePlan { ops, main_source }
}

/// Plan the removal of a previous project's artifacts
///
/// Only the project file and the directories a project owns are removed.
pub fn plan_clear(layout: &ProjectLayout) -> Vec<FsOp> {
    let mut ops = vec![FsOp::RemoveFile {
        path: layout.apf_path(),
    }];
    ops.extend(
        layout
            .owned_dirs()
            .into_iter()
            .map(|path| FsOp::RemoveDirAll { path }),
    );
    ops
}

/// Plan writing a template tree, unchanged, under `root/<family subtree>`
pub fn plan_export(root: &Path, family: BoardFamily, tree: &TemplateTree) -> Vec<FsOp> {
    let base = root.join(family.template_subdir());
    let mut ops = vec![FsOp::CreateDir { path: base.clone() }];

    for entry in tree.entries() {
        let dest = base.join(entry.relative());
        ops.push(match entry {
            TemplateEntry::Dir { .. } => FsOp::CreateDir { path: dest },
            TemplateEntry::File {
                source: FileSource::Inline(contents),
                ..
            } => FsOp::WriteFile {
                path: dest,
                contents: contents.clone(),
            },
            TemplateEntry::File {
                source: FileSource::Path(from),
                ..
            } => FsOp::CopyFile {
                from: from.clone(),
                to: dest,
            },
        });
    }
    ops
}
