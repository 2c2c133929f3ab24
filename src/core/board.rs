//! Board catalog
//!
//! Boards are read-only reference data. The catalog is presented to the user
//! with an extra "no board" entry at selection index 0, so selection index
//! `i > 0` refers to catalog position `i - 1`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::defaults::{
    ARDUINO_EXT, ARDUINO_TEMPLATE_SUBDIR, TIVA_EXT, TIVA_TEMPLATE_SUBDIR,
};
use crate::error::ProjectError;

/// Group of boards sharing a template tree and main-source extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFamily {
    /// Arduino Due, Arduino Zero, Feather
    Arduino,
    /// TI Tiva C LaunchPad
    Tiva,
}

impl BoardFamily {
    /// Extension given to the renamed template file
    pub fn main_source_ext(self) -> &'static str {
        match self {
            Self::Arduino => ARDUINO_EXT,
            Self::Tiva => TIVA_EXT,
        }
    }

    /// Template subtree relative to the templates root
    pub fn template_subdir(self) -> &'static str {
        match self {
            Self::Arduino => ARDUINO_TEMPLATE_SUBDIR,
            Self::Tiva => TIVA_TEMPLATE_SUBDIR,
        }
    }

    /// All families, in catalog order
    pub fn all() -> [Self; 2] {
        [Self::Arduino, Self::Tiva]
    }
}

impl fmt::Display for BoardFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arduino => write!(f, "Arduino"),
            Self::Tiva => write!(f, "Tiva"),
        }
    }
}

/// Target board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Display name
    pub name: String,

    /// Board family
    pub family: BoardFamily,
}

impl Board {
    pub fn new(name: impl Into<String>, family: BoardFamily) -> Self {
        Self {
            name: name.into(),
            family,
        }
    }
}

/// Ordered list of selectable boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCatalog {
    boards: Vec<Board>,
}

impl BoardCatalog {
    /// The boards supported out of the box
    pub fn builtin() -> Self {
        Self {
            boards: vec![
                Board::new("Arduino Due", BoardFamily::Arduino),
                Board::new("Arduino Zero", BoardFamily::Arduino),
                Board::new("Feather", BoardFamily::Arduino),
                Board::new("Tiva", BoardFamily::Tiva),
            ],
        }
    }

    /// Build a catalog from configured boards, falling back to the builtin
    /// list when none are configured
    pub fn from_entries(boards: Vec<Board>) -> Self {
        if boards.is_empty() {
            Self::builtin()
        } else {
            Self { boards }
        }
    }

    /// Boards in catalog order (without the "no board" entry)
    pub fn entries(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Look up a board by 1-based selection index
    pub fn get(&self, selection: usize) -> Result<&Board, ProjectError> {
        if selection == 0 {
            return Err(ProjectError::NoBoardSelected);
        }
        self.boards
            .get(selection - 1)
            .ok_or(ProjectError::BoardOutOfRange {
                index: selection,
                count: self.boards.len(),
            })
    }

    /// Whether a selection index can complete the wizard
    pub fn selection_enables_finish(&self, selection: usize) -> bool {
        selection > 0 && selection <= self.boards.len()
    }

    /// Resolve a selector, either a 1-based index or a board name
    /// (case-insensitive), to a selection index
    pub fn resolve(&self, selector: &str) -> Result<usize, ProjectError> {
        let selector = selector.trim();
        if let Ok(index) = selector.parse::<usize>() {
            self.get(index)?;
            return Ok(index);
        }

        self.boards
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(selector))
            .map(|pos| pos + 1)
            .ok_or_else(|| ProjectError::UnknownBoard {
                selector: selector.to_string(),
            })
    }
}

impl Default for BoardCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
