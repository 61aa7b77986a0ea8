//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/topology/topology.toml`
//! 3. Environment variables: `TOPOLOGY_*` prefix

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::application::{ApplicationError, FormatPreference};

/// Widest indentation accepted for output documents.
pub const MAX_INDENT: usize = 16;

/// Unified configuration for topology.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per nesting level in XML and JSON output (default: 2)
    pub indent: usize,
    /// Output format; `auto` picks JSON for `.json` outputs and XML otherwise
    pub format: FormatPreference,
    /// Log level: error, warn, info, debug or trace (default: warn)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: 2,
            format: FormatPreference::Auto,
            log_level: "warn".into(),
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSettings {
    pub indent: Option<usize>,
    pub format: Option<FormatPreference>,
    pub log_level: Option<String>,
}

/// Get the XDG config directory for topology.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "topology").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("topology.toml"))
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

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/topology/topology.toml`
    /// 3. Environment variables: `TOPOLOGY_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), None)
    }

    /// Load settings from an explicit config file and environment.
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of the variables set around them.
    pub fn load_from(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        current.validate()?;
        Ok(current)
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent: overlay.indent.unwrap_or(self.indent),
            format: overlay.format.unwrap_or(self.format),
            log_level: overlay
                .log_level
                .clone()
                .unwrap_or_else(|| self.log_level.clone()),
        }
    }

    /// Apply TOPOLOGY_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("TOPOLOGY")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("indent") {
            settings.indent = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("TOPOLOGY_INDENT must be a number, got {val:?}"),
            })?;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = FormatPreference::from_str(&val)
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("log_level") {
            settings.log_level = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.indent > MAX_INDENT {
            return Err(ApplicationError::Config {
                message: format!("indent {} exceeds maximum of {}", self.indent, MAX_INDENT),
            });
        }
        self.level_filter().map(|_| ())
    }

    /// Parse `log_level` into a tracing level filter.
    pub fn level_filter(&self) -> Result<LevelFilter, ApplicationError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| ApplicationError::Config {
            message: format!(
                "unknown log level {:?} (expected error, warn, info, debug or trace)",
                self.log_level
            ),
        })
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
