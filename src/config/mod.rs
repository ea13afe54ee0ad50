//! Configuration system for vectorcraft.
//!
//! Settings live in `~/.config/vectorcraft/config.toml`. Every field has a
//! default, so a partial file (or none at all) is fine.
//!
//! # Example
//!
//! ```
//! use vectorcraft::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert_eq!(config.export_prefix, "vectorcraft");
//!
//! let custom = Config {
//!     theme: "nord".to_string(),
//!     create_backup: true,
//!     ..Config::default()
//! };
//! assert!(custom.create_backup);
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::path::ParseMode;

/// Configuration for the vectorcraft application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `path_parse_mode` - Path data parsing: "permissive" or "strict" (default: "permissive")
/// * `revalidate_selection` - Clear the selection when an edit leaves it dangling (default: false)
/// * `create_backup` - Create .bak files before saving (default: false)
/// * `export_prefix` - File name prefix for `:export` (default: "vectorcraft")
/// * `show_attributes_in_tree` - Show attributes next to tags in the structure view (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Path data parsing: "permissive" or "strict"
    #[serde(default = "default_path_parse_mode")]
    pub path_parse_mode: String,

    /// Clear the selection when it no longer resolves after an edit
    #[serde(default)]
    pub revalidate_selection: bool,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// File name prefix for exported documents
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    /// Show attributes next to tag names in the structure view
    #[serde(default = "default_show_attributes_in_tree")]
    pub show_attributes_in_tree: bool,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_path_parse_mode() -> String {
    "permissive".to_string()
}

fn default_export_prefix() -> String {
    "vectorcraft".to_string()
}

fn default_show_attributes_in_tree() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            path_parse_mode: default_path_parse_mode(),
            revalidate_selection: false,
            create_backup: false,
            export_prefix: default_export_prefix(),
            show_attributes_in_tree: default_show_attributes_in_tree(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/vectorcraft/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|mut path| {
            path.push("config.toml");
            path
        })
    }

    /// Returns `~/.config/vectorcraft`, which also holds the log file.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("vectorcraft");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// The configured path parsing mode; unknown values fall back to permissive.
    pub fn parse_mode(&self) -> ParseMode {
        self.path_parse_mode.parse().unwrap_or_else(|e| {
            warn!("{}", e);
            ParseMode::Permissive
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("theme = \"nord\"").unwrap();
        assert_eq!(config.theme, "nord");
        assert_eq!(config.export_prefix, "vectorcraft");
        assert!(config.show_attributes_in_tree);
        assert!(!config.revalidate_selection);
    }

    #[test]
    fn test_parse_mode() {
        let mut config = Config::default();
        assert_eq!(config.parse_mode(), ParseMode::Permissive);
        config.path_parse_mode = "strict".to_string();
        assert_eq!(config.parse_mode(), ParseMode::Strict);
        config.path_parse_mode = "bogus".to_string();
        assert_eq!(config.parse_mode(), ParseMode::Permissive);
    }
}
