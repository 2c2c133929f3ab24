//! Board template trees
//!
//! Templates are read either from a templates root on disk, laid out as
//! `<root>/Arduino/Arduino` and `<root>/Tiva/Tiva`, or from the copy
//! compiled into the binary.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::board::BoardFamily;
use crate::core::plan::{FileSource, TemplateEntry, TemplateTree};
use crate::error::{ArmemusError, FilesystemError, ProjectError};

const ARDUINO_SKETCH: &str = include_str!("../../templates/Arduino/Arduino/template/template");
const TIVA_MAIN: &str = include_str!("../../templates/Tiva/Tiva/template");
const TIVA_STARTUP: &str = include_str!("../../templates/Tiva/Tiva/Tiva Files/startup_gcc.c");
const TIVA_LINKER: &str = include_str!("../../templates/Tiva/Tiva/Tiva Files/tm4c123gh6pm.ld");

/// Where template trees are loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Builtin,
    /// A templates root on disk
    Directory(PathBuf),
}

impl TemplateSource {
    /// Load the template tree for a board family
    pub fn load(&self, family: BoardFamily) -> Result<TemplateTree, ArmemusError> {
        match self {
            Self::Builtin => Ok(builtin_tree(family)),
            Self::Directory(root) => {
                let dir = root.join(family.template_subdir());
                if !dir.is_dir() {
                    return Err(ProjectError::TemplateNotFound { path: dir }.into());
                }
                Ok(scan_tree(&dir)?)
            }
        }
    }
}

/// Built-in template tree for a family
///
/// Entries follow the same name-sorted order a directory scan produces.
pub fn builtin_tree(family: BoardFamily) -> TemplateTree {
    let dir = |relative: &str| TemplateEntry::Dir {
        relative: PathBuf::from(relative),
    };
    let file = |relative: &str, contents: &str| TemplateEntry::File {
        relative: PathBuf::from(relative),
        source: FileSource::Inline(contents.to_string()),
    };

    match family {
        BoardFamily::Arduino => TemplateTree::new(vec![
            dir("template"),
            file("template/template", ARDUINO_SKETCH),
        ]),
        BoardFamily::Tiva => TemplateTree::new(vec![
            dir("Tiva Files"),
            file("Tiva Files/startup_gcc.c", TIVA_STARTUP),
            file("Tiva Files/tm4c123gh6pm.ld", TIVA_LINKER),
            file("template", TIVA_MAIN),
        ]),
    }
}

/// Scan a template directory into a tree
///
/// Directories are yielded before their contents, siblings sorted by name.
pub fn scan_tree(root: &Path) -> Result<TemplateTree, FilesystemError> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: e.path().unwrap_or(root).to_path_buf(),
            error: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| FilesystemError::ReadDir {
                path: entry.path().to_path_buf(),
                error: e.to_string(),
            })?
            .to_path_buf();

        if entry.file_type().is_dir() {
            entries.push(TemplateEntry::Dir { relative });
        } else if entry.file_type().is_file() {
            entries.push(TemplateEntry::File {
                relative,
                source: FileSource::Path(entry.path().to_path_buf()),
            });
        } else {
            tracing::debug!("Skipping special file {}", entry.path().display());
        }
    }

    tracing::debug!("Scanned {} template entries in {}", entries.len(), root.display());
    Ok(TemplateTree::new(entries))
}
