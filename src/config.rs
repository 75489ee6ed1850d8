//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Explicit config file (`--config` / `RSTREE_CONFIG`)
//! 4. Environment variables: `RSTREE_*` prefix

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::capacity::{DEFAULT_MAX_OTHER_NODE_CHILDREN, DEFAULT_MAX_ROOT_CHILDREN};

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Fan-out cap of the n-ary root
    pub max_root_children: usize,
    /// Upper bound of the random capacity draw for non-root n-ary nodes
    pub max_other_node_children: usize,
    /// Fixed RNG seed; unset means a fresh seed per run
    pub seed: Option<u64>,
    /// Number of values loaded by `random`
    pub sample_count: usize,
    /// Lowest random value (inclusive)
    pub sample_min: i64,
    /// Highest random value (inclusive)
    pub sample_max: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_root_children: DEFAULT_MAX_ROOT_CHILDREN,
            max_other_node_children: DEFAULT_MAX_OTHER_NODE_CHILDREN,
            seed: None,
            sample_count: 15,
            sample_min: 1,
            sample_max: 99,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_root_children: Option<usize>,
    pub max_other_node_children: Option<usize>,
    pub seed: Option<u64>,
    pub sample_count: Option<usize>,
    pub sample_min: Option<i64>,
    pub sample_max: Option<i64>,
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
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

/// Env values arrive as strings; parse them at the field's own width.
fn env_number<T>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match config.get_string(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ApplicationError::Config {
                message: format!("{key}: invalid value '{raw}': {e}"),
            }),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_root_children: overlay.max_root_children.unwrap_or(self.max_root_children),
            max_other_node_children: overlay
                .max_other_node_children
                .unwrap_or(self.max_other_node_children),
            seed: overlay.seed.or(self.seed),
            sample_count: overlay.sample_count.unwrap_or(self.sample_count),
            sample_min: overlay.sample_min.unwrap_or(self.sample_min),
            sample_max: overlay.sample_max.unwrap_or(self.sample_max),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Load a single file on top of the defaults, skipping global config and env vars.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        let settings = Self::default().merge_with(&load_raw_settings(path)?);
        settings.validate()?;
        Ok(settings)
    }

    /// Apply RSTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RSTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            max_root_children: env_number(&config, "max_root_children")?,
            max_other_node_children: env_number(&config, "max_other_node_children")?,
            seed: env_number(&config, "seed")?,
            sample_count: env_number(&config, "sample_count")?,
            sample_min: env_number(&config, "sample_min")?,
            sample_max: env_number(&config, "sample_max")?,
        };
        settings = settings.merge_with(&raw);
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_root_children == 0 {
            return Err(ApplicationError::Config {
                message: "max_root_children must be at least 1".to_string(),
            });
        }
        if self.sample_min > self.sample_max {
            return Err(ApplicationError::Config {
                message: format!(
                    "sample_min ({}) must not exceed sample_max ({})",
                    self.sample_min, self.sample_max
                ),
            });
        }
        Ok(())
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
