//! Global configuration management
//!
//! Reads and manages global settings from `config.toml` in the config directory.
//! Global settings include the templates root, the wizard's initial location
//! and an optional replacement board catalog.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::board::{Board, BoardCatalog};
use crate::error::ConfigError;
use crate::infra::dirs::ArmemusDirs;
use crate::infra::templates::TemplateSource;

/// Environment variable overriding the templates root
pub const ENV_TEMPLATES_DIR: &str = "ARMEMUS_TEMPLATES_DIR";

/// Global configuration for armemus
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalConfig {
    /// Template settings
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// New-project defaults
    #[serde(default)]
    pub project: ProjectDefaults,

    /// Board catalog; replaces the builtin catalog when non-empty
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// Template configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TemplatesConfig {
    /// Templates root directory
    pub dir: Option<PathBuf>,
}

/// New-project defaults
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectDefaults {
    /// Initial location shown by the wizard
    pub default_location: Option<PathBuf>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    pub fn load(dirs: &ArmemusDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Board catalog to present
    #[must_use]
    pub fn catalog(&self) -> BoardCatalog {
        BoardCatalog::from_entries(self.boards.clone())
    }

    /// Initial location for the wizard
    ///
    /// Returns the configured location if set, otherwise the home directory.
    #[must_use]
    pub fn default_location(&self) -> PathBuf {
        self.project
            .default_location
            .clone()
            .unwrap_or_else(ArmemusDirs::home_dir)
    }

    /// Resolve where templates are loaded from
    ///
    /// Order: explicit override, `ARMEMUS_TEMPLATES_DIR`, `templates.dir`,
    /// the data directory's `templates/` if present, then the builtin set.
    #[must_use]
    pub fn template_source(&self, dirs: &ArmemusDirs, explicit: Option<&Path>) -> TemplateSource {
        let env_dir = std::env::var_os(ENV_TEMPLATES_DIR).map(PathBuf::from);
        self.template_source_with(dirs, explicit, env_dir)
    }

    fn template_source_with(
        &self,
        dirs: &ArmemusDirs,
        explicit: Option<&Path>,
        env_dir: Option<PathBuf>,
    ) -> TemplateSource {
        let configured = explicit
            .map(Path::to_path_buf)
            .or(env_dir)
            .or_else(|| self.templates.dir.clone());

        if let Some(dir) = configured {
            if !dir.is_dir() {
                tracing::warn!("Templates directory {} does not exist", dir.display());
            }
            return TemplateSource::Directory(dir);
        }

        let data_templates = dirs.templates_dir();
        if data_templates.is_dir() {
            return TemplateSource::Directory(data_templates);
        }

        TemplateSource::Builtin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BoardFamily;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert!(config.templates.dir.is_none());
        assert!(config.project.default_location.is_none());
        assert!(config.boards.is_empty());
        assert_eq!(config.catalog(), BoardCatalog::builtin());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let config = GlobalConfig::load_from_path(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_load_boards_and_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[templates]
dir = "/opt/armemus/templates"

[project]
default_location = "/work"

[[boards]]
name = "Tiva C Connected"
family = "tiva"
"#,
        )
        .unwrap();

        let config = GlobalConfig::load_from_path(&path).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from("/opt/armemus/templates")));
        assert_eq!(config.default_location(), PathBuf::from("/work"));
        let catalog = config.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().family, BoardFamily::Tiva);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[[boards]]\nname = \"x\"\nfamily = \"esp32\"\n").unwrap();
        assert!(matches!(
            GlobalConfig::load_from_path(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_template_source_precedence() {
        let temp = TempDir::new().unwrap();
        let dirs = ArmemusDirs::new();
        let config = GlobalConfig {
            templates: TemplatesConfig {
                dir: Some(PathBuf::from("/from-config")),
            },
            ..GlobalConfig::default()
        };

        assert_eq!(
            config.template_source_with(&dirs, Some(temp.path()), Some(PathBuf::from("/from-env"))),
            TemplateSource::Directory(temp.path().to_path_buf())
        );
        assert_eq!(
            config.template_source_with(&dirs, None, Some(PathBuf::from("/from-env"))),
            TemplateSource::Directory(PathBuf::from("/from-env"))
        );
        assert_eq!(
            config.template_source_with(&dirs, None, None),
            TemplateSource::Directory(PathBuf::from("/from-config"))
        );
    }
}
