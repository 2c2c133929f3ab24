//! Platform-specific directory management
//!
//! Provides platform-specific paths for config and data directories.
//! Follows XDG Base Directory Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `ARMEMUS_CONFIG_DIR` - Override config directory
//! - `ARMEMUS_DATA_DIR` - Override data directory

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CONFIG_DIR: &str = "ARMEMUS_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "ARMEMUS_DATA_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "armemus";

const TEMPLATES_SUBDIR: &str = "templates";

/// Platform-specific directory provider for armemus
#[derive(Debug, Clone)]
pub struct ArmemusDirs {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl ArmemusDirs {
    /// Create a new `ArmemusDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve(ENV_CONFIG_DIR, dirs::config_dir, ".config"),
            data_dir: Self::resolve(ENV_DATA_DIR, dirs::data_dir, ".local/share"),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/armemus` or `~/.config/armemus`
    /// - macOS: `~/Library/Application Support/armemus`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the data directory path
    ///
    /// - Linux: `$XDG_DATA_HOME/armemus` or `~/.local/share/armemus`
    /// - macOS: `~/Library/Application Support/armemus`
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Default templates root, used when it exists and nothing else is configured
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.data_dir.join(TEMPLATES_SUBDIR)
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Initial location offered by the wizard
    #[must_use]
    pub fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    fn resolve(var: &str, platform: fn() -> Option<PathBuf>, fallback: &str) -> PathBuf {
        if let Ok(path) = env::var(var) {
            return PathBuf::from(path);
        }

        platform()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(fallback).join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(fallback).join(APP_NAME))
            })
    }
}

impl Default for ArmemusDirs {
    fn default() -> Self {
        Self::new()
    }
}
