use crate::error::{Error, Result};
use crate::model::Section;
use crate::state::{SortBy, SortOptions, SortOrder, View, DEFAULT_RETENTION_DAYS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Navigator configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub sort: SortConfig,
    pub trash: TrashConfig,
    pub navigation: NavigationConfig,
}

/// Initial listing order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SortConfig {
    /// "name" or "modified"
    pub by: SortBy,
    /// "asc" or "desc"
    pub order: SortOrder,
}

/// Trash retention
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrashConfig {
    /// Days a trashed item is kept before it counts as expired
    pub retention_days: u32,
}

/// Where the navigator starts and how much history it keeps
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub default_section: Section,
    pub default_view: View,
    /// Maximum back/forward entries
    pub history_limit: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        let options = SortOptions::default();
        SortConfig {
            by: options.sort_by,
            order: options.sort_order,
        }
    }
}

impl Default for TrashConfig {
    fn default() -> Self {
        TrashConfig {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            default_section: Section::Operational,
            default_view: View::Library,
            history_limit: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sort: SortConfig::default(),
            trash: TrashConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "folio")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions::new(self.sort.by, self.sort.order)
    }

    /// Load configuration from the default location, or return defaults
    /// if the file is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sort.by, SortBy::Name);
        assert_eq!(config.sort.order, SortOrder::Ascending);
        assert_eq!(config.trash.retention_days, 30);
        assert_eq!(config.navigation.default_section, Section::Operational);
        assert_eq!(config.navigation.history_limit, 50);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[sort]
by = "modified"
order = "desc"

[navigation]
default_view = "bookmarks"
"#,
        )
        .unwrap();

        assert_eq!(config.sort_options().to_string(), "date-desc");
        assert_eq!(config.navigation.default_view, View::Bookmarks);
        assert_eq!(config.trash.retention_days, 30);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.trash.retention_days = 7;
        config.navigation.default_section = Section::Customer;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_bad_value_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sort]\nby = \"size\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::TomlDe(_))));
    }
}
