//! Armemus - project scaffolding for the ARMEmuS embedded IDE
//!
//! This library creates new ARMEmuS projects: a project directory with a
//! `Build/` folder, an XML `.apf` project file and a copy of the board
//! family's template tree (Arduino or Tiva).
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (board catalog, wizard, planning)
//! - [`infra`] - Infrastructure layer (filesystem, templates, directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
