//! Error types for armemus
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project creation errors
#[derive(Error, Debug)]
pub enum ProjectError {
    /// Project name is empty
    #[error("Project name cannot be empty")]
    EmptyName,

    /// Project name cannot be used as a directory name
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Project location is empty
    #[error("Project location cannot be empty")]
    EmptyPath,

    /// Board index 0 is the "no board selected" entry
    #[error("No board selected")]
    NoBoardSelected,

    /// Board index past the end of the catalog
    #[error("Board index {index} is out of range (1-{count})")]
    BoardOutOfRange { index: usize, count: usize },

    /// Board selector matched nothing
    #[error("Board '{selector}' not found. Run 'armemus boards' to list boards")]
    UnknownBoard { selector: String },

    /// Project file already exists and the user declined to overwrite it
    #[error("Project '{path}' already exists")]
    ProjectExists { path: PathBuf },

    /// Template tree for a board family is missing
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: PathBuf },
}

/// Wizard navigation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    /// Next pressed while name or path is empty
    #[error("Project name and location are required before choosing a board")]
    CannotAdvance,

    /// Finish pressed without a valid board
    #[error("Select a board to finish")]
    CannotFinish,
}

/// Project file (.apf) errors
#[derive(Error, Debug)]
pub enum ApfError {
    /// Malformed XML
    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Root element is not the project file root
    #[error("Unexpected root element '{found}', expected '{expected}'")]
    WrongRoot { found: String, expected: String },

    /// Required skeleton element is missing
    #[error("Missing element '{element}'")]
    MissingElement { element: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to change permissions
    #[error("Failed to set permissions on '{path}': {error}")]
    Permissions { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Global configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Top-level armemus error type
#[derive(Error, Debug)]
pub enum ArmemusError {
    /// Project error
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    /// Wizard error
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Project file error
    #[error("Project file error: {0}")]
    Apf(#[from] ApfError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
