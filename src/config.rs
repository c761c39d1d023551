//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/taxonomy/taxonomy.toml`
//! 3. Local config: `<document_dir>/.taxonomy.toml`
//! 4. Environment variables: `TAXONOMY_*` prefix (`TAXONOMY_RENDER__OUTER_TAG`, ...)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::RenderOptions;

const LOCAL_CONFIG_FILE: &str = ".taxonomy.toml";

/// Unified configuration for taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Show node ids next to labels in `show` output
    pub show_ids: bool,
    /// Markup rendering defaults
    pub render: RenderOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_ids: true,
            render: RenderOptions::default(),
        }
    }
}

/// Raw render settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub outer_tag: Option<String>,
    pub inner_tag: Option<String>,
    pub start_path: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub show_ids: Option<bool>,
    pub render: RawRenderSettings,
}

/// Get the XDG config directory for taxonomy.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taxonomy").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("taxonomy.toml"))
}

/// Get the path to the local config file in a document directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
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
    /// Merge overlay config onto self (base): overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        let render = &overlay.render;
        Self {
            render: RenderOptions {
                outer_tag: render
                    .outer_tag
                    .clone()
                    .unwrap_or_else(|| self.render.outer_tag.clone()),
                inner_tag: render
                    .inner_tag
                    .clone()
                    .unwrap_or_else(|| self.render.inner_tag.clone()),
                start_path: render
                    .start_path
                    .clone()
                    .unwrap_or_else(|| self.render.start_path.clone()),
            },
            show_ids: overlay.show_ids.unwrap_or(self.show_ids),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.taxonomy.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply TAXONOMY_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TAXONOMY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("render.outer_tag") {
            settings.render.outer_tag = val;
        }
        if let Ok(val) = config.get_string("render.inner_tag") {
            settings.render.inner_tag = val;
        }
        if let Ok(val) = config.get_string("render.start_path") {
            settings.render.start_path = val;
        }
        if let Ok(val) = config.get_bool("show_ids") {
            settings.show_ids = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# taxonomy configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/taxonomy/taxonomy.toml
#   Local:  <document_dir>/.taxonomy.toml
#   Env:    TAXONOMY_* environment variables (TAXONOMY_RENDER__START_PATH, ...)

# Show node ids in `taxonomy show`
# show_ids = true

[render]
# List container tag
# outer_tag = "ul"

# Item tag
# inner_tag = "li"

# Link prefix; set to "" when not using hash-bang urls
# start_path = "/#!"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
