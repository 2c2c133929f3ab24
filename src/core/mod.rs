//! Core business logic module
//!
//! This module contains the decision logic for armemus. Apart from
//! [`global_config`] and the conflict check in [`create`], it performs no
//! I/O; filesystem work is planned here and carried out by [`crate::infra`].
//!
//! # Submodules
//!
//! - [`apf`] - Project file (.apf) rendering and parsing
//! - [`board`] - Board catalog and families
//! - [`create`] - Project creation workflow
//! - [`global_config`] - Global configuration management
//! - [`plan`] - Filesystem operation planning
//! - [`project`] - Project identity and layout
//! - [`wizard`] - New-project wizard state

pub mod apf;
pub mod board;
pub mod create;
pub mod global_config;
pub mod plan;
pub mod project;
pub mod wizard;
