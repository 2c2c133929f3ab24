//! Filesystem operations
//!
//! Handles file and directory operations, and applies planned [`FsOp`]s.

use std::path::Path;

use crate::core::plan::FsOp;
use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.is_dir() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Remove a file if it exists
pub fn remove_file(path: &Path) -> Result<(), FilesystemError> {
    if path.is_file() {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Copy a file, replacing the destination
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    // A previous copy may have left the destination without write access
    if to.is_file() {
        remove_file(to)?;
    }
    std::fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| FilesystemError::CopyFile {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            error: e.to_string(),
        })
}

/// Restrict a file to owner read/write
pub fn set_owner_read_write(path: &Path) -> Result<(), FilesystemError> {
    let map_err = |e: std::io::Error| FilesystemError::Permissions {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    #[cfg(unix)]
    let permissions = {
        use std::os::unix::fs::PermissionsExt;
        std::fs::Permissions::from_mode(0o600)
    };

    #[cfg(not(unix))]
    let permissions = {
        let mut permissions = std::fs::metadata(path).map_err(map_err)?.permissions();
        permissions.set_readonly(false);
        permissions
    };

    std::fs::set_permissions(path, permissions).map_err(map_err)
}

/// Applies planned filesystem operations
pub trait FsExecutor {
    /// Apply a single operation
    fn apply(&mut self, op: &FsOp) -> Result<(), FilesystemError>;

    /// Apply operations in order, stopping at the first failure
    fn execute(&mut self, ops: &[FsOp]) -> Result<(), FilesystemError> {
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }
}

/// Executor that performs real I/O
#[derive(Default)]
pub struct DiskExecutor<'a> {
    observer: Option<Box<dyn FnMut(&FsOp) + 'a>>,
}

impl<'a> DiskExecutor<'a> {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Call `observer` after every successful operation
    pub fn with_observer(observer: impl FnMut(&FsOp) + 'a) -> Self {
        Self {
            observer: Some(Box::new(observer)),
        }
    }
}

impl FsExecutor for DiskExecutor<'_> {
    fn apply(&mut self, op: &FsOp) -> Result<(), FilesystemError> {
        tracing::debug!("{op}");
        match op {
            FsOp::CreateDir { path } => create_dir_all(path)?,
            FsOp::WriteFile { path, contents } => write_file(path, contents)?,
            FsOp::CopyFile { from, to } => copy_file(from, to)?,
            FsOp::SetOwnerReadWrite { path } => set_owner_read_write(path)?,
            FsOp::RemoveFile { path } => remove_file(path)?,
            FsOp::RemoveDirAll { path } => remove_dir_all(path)?,
        }
        if let Some(observer) = self.observer.as_mut() {
            observer(op);
        }
        Ok(())
    }
}

/// Executor that only records operations (dry runs)
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub ops: Vec<FsOp>,
}

impl FsExecutor for RecordingExecutor {
    fn apply(&mut self, op: &FsOp) -> Result<(), FilesystemError> {
        self.ops.push(op.clone());
        Ok(())
    }
}
