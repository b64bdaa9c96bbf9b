//! Configuration system for dictor.
//!
//! Holds the default resolution options and output preferences for the
//! `dictor` command. Configuration is loaded from a TOML file and overridden
//! by command-line arguments.
//!
//! # Example
//!
//! ```
//! use dictor::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.pathsep, '.');
//! assert!(!config.ignorecase);
//!
//! let custom = Config {
//!     pathsep: '/',
//!     ..Config::default()
//! };
//! assert_eq!(custom.resolve_options().pathsep, '/');
//! ```

use crate::keypath::options::{default_pathsep, ResolveOptions};
use serde::{Deserialize, Serialize};

/// Configuration for the dictor command.
///
/// # Fields
///
/// * `pathsep` - Path separator character (default: '.')
/// * `ignorecase` - Case-insensitive key matching (default: false)
/// * `checknone` - Treat missing and null results as errors (default: false)
/// * `pretty` - Pretty-print JSON output (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path separator character
    #[serde(default = "default_pathsep")]
    pub pathsep: char,

    /// Case-insensitive key matching
    #[serde(default)]
    pub ignorecase: bool,

    /// Treat missing and null results as errors
    #[serde(default)]
    pub checknone: bool,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pathsep: default_pathsep(),
            ignorecase: false,
            checknone: false,
            pretty: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/dictor/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("dictor");
            path.push("config.toml");
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

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("Could not read config {}: {}", path.display(), err);
                Self::default()
            }
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

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// The resolution options this configuration describes.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            pathsep: self.pathsep,
            ignorecase: self.ignorecase,
            checknone: self.checknone,
        }
    }
}
