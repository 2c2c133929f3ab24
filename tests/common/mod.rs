//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory holding the project location plus
/// isolated config and data directories, and runs the armemus binary
/// against them.
pub struct TestProject {
    /// Temporary directory for the test
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        project.create_dir("config");
        project.create_dir("data");
        project
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Location projects are created in
    pub fn location(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Folder of the project named `name`
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.location().join(name)
    }

    /// Write the global config file
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        self.create_file("config/config.toml", content);
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the workspace
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the workspace
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run armemus with isolated config/data directories
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_armemus"));
        cmd.current_dir(self.path());
        cmd.env("ARMEMUS_CONFIG_DIR", self.dir.path().join("config"));
        cmd.env("ARMEMUS_DATA_DIR", self.dir.path().join("data"));
        cmd.env_remove("ARMEMUS_TEMPLATES_DIR");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd.output().expect("Failed to execute armemus")
    }

    /// Run `armemus new <name> --path <location> --board <board> [extra...]`
    #[allow(dead_code)]
    pub fn new_project(&self, name: &str, board: &str, extra: &[&str]) -> Output {
        let location = self.location();
        let location = location.to_str().expect("utf-8 temp path");
        let mut args = vec!["new", name, "--path", location, "--board", board];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert a command succeeded, showing stderr otherwise
#[allow(dead_code)]
pub fn assert_success(output: &Output, what: &str) {
    assert!(
        output.status.success(),
        "{what} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Root element name of an XML file
#[allow(dead_code)]
pub fn xml_root(path: &Path) -> String {
    let content = std::fs::read_to_string(path).expect("Failed to read XML file");
    let doc = roxmltree::Document::parse(&content).expect("Failed to parse XML file");
    doc.root_element().tag_name().name().to_string()
}

/// Repository templates root
#[allow(dead_code)]
pub fn repo_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}
