//! New-project wizard state
//!
//! Two steps: the location step collects the project name and directory,
//! the board step collects the target board. This module tracks which
//! actions are enabled; front ends only render it.

use std::path::{Path, PathBuf};

use crate::core::board::BoardCatalog;
use crate::core::project::ProjectInfo;
use crate::error::WizardError;

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardTab {
    /// Project name and location
    Location,
    /// Board selection
    Board,
}

/// New-project wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: BoardCatalog,
    default_location: PathBuf,
    name: String,
    location: PathBuf,
    board_index: usize,
    tab: WizardTab,
    closed: bool,
}

impl Wizard {
    /// Create a wizard whose location field starts at `default_location`
    pub fn new(catalog: BoardCatalog, default_location: impl Into<PathBuf>) -> Self {
        let mut wizard = Self {
            catalog,
            default_location: default_location.into(),
            name: String::new(),
            location: PathBuf::new(),
            board_index: 0,
            tab: WizardTab::Location,
            closed: false,
        };
        wizard.clear();
        wizard
    }

    /// Reset every field to its initial value
    pub fn clear(&mut self) {
        self.name.clear();
        self.location.clone_from(&self.default_location);
        self.board_index = 0;
        self.tab = WizardTab::Location;
        self.closed = false;
    }

    pub fn catalog(&self) -> &BoardCatalog {
        &self.catalog
    }

    pub fn tab(&self) -> WizardTab {
        self.tab
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn board_index(&self) -> usize {
        self.board_index
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_location(&mut self, location: impl AsRef<Path>) {
        self.location = location.as_ref().to_path_buf();
    }

    /// Next is enabled when both name and location are filled in
    pub fn can_advance(&self) -> bool {
        !self.name.is_empty() && !self.location.as_os_str().is_empty()
    }

    pub fn next(&mut self) -> Result<(), WizardError> {
        if !self.can_advance() {
            return Err(WizardError::CannotAdvance);
        }
        self.tab = WizardTab::Board;
        Ok(())
    }

    pub fn back(&mut self) {
        self.tab = WizardTab::Location;
    }

    /// Return to the location step after the user declined to overwrite
    pub fn return_to_location(&mut self) {
        self.back();
    }

    pub fn select_board(&mut self, index: usize) {
        self.board_index = index;
    }

    /// Finish is enabled for any valid board, never for index 0
    pub fn can_finish(&self) -> bool {
        self.can_advance() && self.catalog.selection_enables_finish(self.board_index)
    }

    /// Collect the entered information
    pub fn finish(&self) -> Result<ProjectInfo, WizardError> {
        if !self.can_finish() {
            return Err(WizardError::CannotFinish);
        }
        Ok(ProjectInfo::new(
            self.name.clone(),
            self.location.clone(),
            self.board_index,
        ))
    }

    /// Discard input, including the location, and close
    pub fn cancel(&mut self) {
        self.clear();
        self.location = PathBuf::new();
        self.closed = true;
    }

    /// Close after a project has been created
    pub fn close(&mut self) {
        self.closed = true;
    }
}
