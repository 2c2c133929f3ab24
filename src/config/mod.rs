//! Configuration and constants
//!
//! Fixed names and default values used across the crate.

pub mod defaults;
