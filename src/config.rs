//! Configuration loading.
//!
//! Settings live in `<config dir>/arx/config.toml` (override with
//! `ARX_CONFIG`). A missing file means defaults; every field is optional.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::export::{ExportOptions, KindSelection, NameResolver};
use crate::files::ExtensionTable;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "ARX_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    /// Language tag → extension overrides.
    pub extensions: BTreeMap<String, String>,
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output root used when `-o` is not given.
    pub output_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub executable_scripts: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            scripts_dir: PathBuf::from("scripts"),
            docs_dir: PathBuf::from("docs"),
            executable_scripts: true,
        }
    }
}

impl Config {
    /// Path of the config file (`$ARX_CONFIG` or the platform default).
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("arx").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads the config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the config from `path`, using defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config TOML.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serializes the config as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Extension table with this config's overrides applied.
    pub fn extension_table(&self) -> ExtensionTable {
        ExtensionTable::with_overrides(&self.extensions)
    }

    /// Name resolver built from this config.
    pub fn resolver(&self) -> NameResolver {
        NameResolver::new(self.extension_table())
    }

    /// Export options for a run over the given kinds.
    pub fn export_options(&self, kinds: KindSelection) -> ExportOptions {
        ExportOptions {
            scripts_dir: self.export.scripts_dir.clone(),
            docs_dir: self.export.docs_dir.clone(),
            kinds,
            executable_scripts: self.export.executable_scripts,
        }
    }
}
