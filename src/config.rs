//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgchain/orgchain.toml`
//! 3. Explicit config file given on the command line
//! 4. Environment variables: `ORGCHAIN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::DEFAULT_DELIMITER;

const ENV_PREFIX: &str = "ORGCHAIN";

/// Unified configuration for orgchain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Lines skipped at the top of a record file (default: 1, the header row)
    pub header_lines: usize,
    /// Record field delimiter (default: `|`)
    pub delimiter: char,
    /// Analyse id pairs on the rayon thread pool
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_lines: 1,
            delimiter: DEFAULT_DELIMITER,
            parallel: true,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub header_lines: Option<usize>,
    pub delimiter: Option<char>,
    pub parallel: Option<bool>,
}

/// Get the XDG config directory for orgchain.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgchain").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgchain.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user supplied path.
pub fn expand_path(path: &Path) -> Result<PathBuf, ApplicationError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|e| ApplicationError::Config {
            message: format!("expand {}: {}", raw, e),
        })
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            header_lines: overlay.header_lines.unwrap_or(self.header_lines),
            delimiter: overlay.delimiter.unwrap_or(self.delimiter),
            parallel: overlay.parallel.unwrap_or(self.parallel),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional settings file; unlike the global file it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = current.apply_env_overrides(ENV_PREFIX)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply `<prefix>_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut self, prefix: &str) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get::<usize>("header_lines") {
            self.header_lines = val;
        }
        if let Ok(val) = config.get_string("delimiter") {
            let mut chars = val.chars();
            self.delimiter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ApplicationError::Config {
                        message: format!("delimiter must be a single character, got {:?}", val),
                    })
                }
            };
        }
        if let Ok(val) = config.get_bool("parallel") {
            self.parallel = val;
        }

        Ok(self)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.delimiter.is_whitespace() || self.delimiter.is_alphanumeric() {
            return Err(ApplicationError::Config {
                message: format!("unusable delimiter {:?}", self.delimiter),
            });
        }
        Ok(())
    }
}
