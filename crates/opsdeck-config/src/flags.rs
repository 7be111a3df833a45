//! Feature-flag toggle store.
//!
//! A small TOML file of named booleans. Missing fields take defaults, so
//! a partial file or no file at all works out of the box.

use opsdeck_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Dashboard feature toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Serve generated demo entities instead of live data.
    pub demo_data: bool,
    /// Unreleased chart views.
    pub experimental_charts: bool,
    /// Compact row spacing in entity tables.
    pub dense_tables: bool,
    /// Re-apply the theme when the preference file changes on disk.
    pub live_theme_reload: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            demo_data: true,
            experimental_charts: false,
            dense_tables: false,
            live_theme_reload: true,
        }
    }
}

impl FeatureFlags {
    /// Look up a flag by name.
    pub fn is_enabled(&self, name: &str) -> Result<bool, ConfigError> {
        match name {
            "demo_data" => Ok(self.demo_data),
            "experimental_charts" => Ok(self.experimental_charts),
            "dense_tables" => Ok(self.dense_tables),
            "live_theme_reload" => Ok(self.live_theme_reload),
            _ => Err(ConfigError::ValidationError(format!(
                "unknown feature flag '{name}'"
            ))),
        }
    }

    /// Flip a flag by name, returning its new value.
    pub fn toggle(&mut self, name: &str) -> Result<bool, ConfigError> {
        let flag = match name {
            "demo_data" => &mut self.demo_data,
            "experimental_charts" => &mut self.experimental_charts,
            "dense_tables" => &mut self.dense_tables,
            "live_theme_reload" => &mut self.live_theme_reload,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown feature flag '{name}'"
                )))
            }
        };
        *flag = !*flag;
        Ok(*flag)
    }
}

/// Load flags from a TOML file. A missing file returns defaults.
pub fn load_from_path(path: &Path) -> Result<FeatureFlags, ConfigError> {
    if !path.exists() {
        return Ok(FeatureFlags::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let flags: FeatureFlags = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse flags TOML: {e}")))?;

    info!("loaded feature flags from {}", path.display());
    Ok(flags)
}

/// Save flags to a TOML file, creating parent directories as needed.
pub fn save_to_path(path: &Path, flags: &FeatureFlags) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create flags directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = toml::to_string_pretty(flags)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize flags: {e}")))?;

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!("failed to write flags to {}: {e}", path.display()))
    })?;

    Ok(())
}
