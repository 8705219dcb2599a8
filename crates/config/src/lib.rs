//! Bookshelf Configuration System
//!
//! Settings live in a small TOML file in the platform config directory.
//! Every field has a default, so a missing file, or a file that only sets
//! one value, is always usable.
//!
//! # Architecture
//!
//! Each section implements `ConfigSection` and `Config::validate` reports
//! the problems of every section together. Environment variables are layered
//! on top with `Config::apply_env_overrides`; command-line flags are applied
//! last by the binary.
//!
//! ```rust,no_run
//! use bookshelf_config::ConfigManager;
//!
//! let manager = ConfigManager::new().expect("Failed to resolve config directory");
//! let mut config = manager.load().unwrap_or_default();
//! config.apply_env_overrides(|key| std::env::var(key).ok());
//! println!("Library file: {}", config.library.data_file.display());
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod library_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use validation::{ConfigSection, Validator};

pub use app_config::{AppConfig, LogLevel};
pub use library_config::LibraryConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding `library.data_file`
pub const ENV_DATA_FILE: &str = "BOOKSHELF_DATA_FILE";

/// Environment variable overriding `app.log_level`
pub const ENV_LOG_LEVEL: &str = "BOOKSHELF_LOG_LEVEL";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Library data file settings
    pub library: LibraryConfig,
}

impl Config {
    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.library.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Applies `BOOKSHELF_*` overrides read through `lookup`
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_FILE) {
            if path.is_empty() {
                log::warn!("{} is set but empty, ignoring", ENV_DATA_FILE);
            } else {
                self.library.data_file = PathBuf::from(path);
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match level.parse::<LogLevel>() {
                Ok(level) => self.app.log_level = level,
                Err(e) => log::warn!("Ignoring {}: {}", ENV_LOG_LEVEL, e),
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            library: LibraryConfig::default(),
        }
    }
}
