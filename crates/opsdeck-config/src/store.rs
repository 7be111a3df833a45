//! JSON preference blob store.
//!
//! The shell persists arbitrary JSON-serializable values to a single
//! key-value blob file. Two keys are reserved for the theme snapshot:
//! the configuration payload and the last-write timestamp. The theme
//! engine itself never touches this file.

use chrono::{DateTime, Utc};
use opsdeck_common::{validate_color, ConfigError};
use opsdeck_theme::{BackgroundSettings, ThemeConfig};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reserved key for the persisted [`ThemeConfig`] payload.
pub const THEME_CONFIG_KEY: &str = "theme.configuration";
/// Reserved key for the RFC 3339 timestamp of the last theme write.
pub const THEME_UPDATED_AT_KEY: &str = "theme.updated_at";

/// The on-disk blob: a flat string-keyed map of JSON values.
pub type PreferenceBlob = BTreeMap<String, Value>;

/// Key-value preference store backed by a single JSON file.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The platform-specific default blob path.
    ///
    /// On macOS: `~/Library/Application Support/opsdeck/preferences.json`
    /// On Linux: `~/.config/opsdeck/preferences.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::ParseError("could not determine config directory".into())
        })?;
        Ok(config_dir.join("opsdeck").join("preferences.json"))
    }

    pub fn at_default_path() -> Result<Self, ConfigError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Read the whole blob. Errors if the file does not exist.
    pub fn load(&self) -> Result<PreferenceBlob, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::FileNotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let blob: PreferenceBlob = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("failed to parse preference JSON: {e}"))
        })?;

        Ok(blob)
    }

    /// Read the blob, treating a missing file as empty.
    pub fn load_or_empty(&self) -> Result<PreferenceBlob, ConfigError> {
        match self.load() {
            Ok(blob) => Ok(blob),
            Err(ConfigError::FileNotFound(_)) => Ok(PreferenceBlob::new()),
            Err(e) => Err(e),
        }
    }

    /// Write the whole blob, creating parent directories on first save.
    pub fn save(&self, blob: &PreferenceBlob) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::ParseError(format!(
                    "failed to create preference directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(blob).map_err(|e| {
            ConfigError::ParseError(format!("failed to serialize preferences: {e}"))
        })?;

        std::fs::write(&self.path, content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to write preferences to {}: {e}",
                self.path.display()
            ))
        })?;

        info!("saved preferences to {}", self.path.display());
        Ok(())
    }

    /// Fetch a single value by key.
    pub fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.load_or_empty()?.get(key).cloned())
    }

    /// Set a single value by key, read-modify-write.
    pub fn set(&self, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut blob = self.load_or_empty()?;
        blob.insert(key.to_string(), value);
        self.save(&blob)
    }

    /// Persist a theme snapshot under the two reserved keys.
    pub fn save_theme_snapshot(&self, config: &ThemeConfig) -> Result<(), ConfigError> {
        let payload = serde_json::to_value(config).map_err(|e| {
            ConfigError::ParseError(format!("failed to serialize theme snapshot: {e}"))
        })?;

        let mut blob = self.load_or_empty()?;
        blob.insert(THEME_CONFIG_KEY.to_string(), payload);
        blob.insert(
            THEME_UPDATED_AT_KEY.to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        self.save(&blob)
    }

    /// Load the persisted theme snapshot, if any.
    ///
    /// A malformed `solid_color` is replaced with the default color with a
    /// warning; the numeric geometry fields are never range-checked here —
    /// whatever was persisted comes back verbatim.
    pub fn load_theme_snapshot(&self) -> Result<Option<ThemeConfig>, ConfigError> {
        let blob = self.load_or_empty()?;
        let Some(payload) = blob.get(THEME_CONFIG_KEY) else {
            return Ok(None);
        };

        let mut config: ThemeConfig =
            serde_json::from_value(payload.clone()).map_err(|e| {
                ConfigError::ParseError(format!("failed to parse theme snapshot: {e}"))
            })?;

        if !validate_color(&config.background.solid_color) {
            warn!(
                "malformed solid_color '{}' in theme snapshot, using default",
                config.background.solid_color
            );
            config.background.solid_color = BackgroundSettings::default().solid_color;
        }

        Ok(Some(config))
    }

    /// The timestamp of the last theme write, if recorded.
    pub fn last_theme_write(&self) -> Result<Option<DateTime<Utc>>, ConfigError> {
        let Some(value) = self.get(THEME_UPDATED_AT_KEY)? else {
            return Ok(None);
        };
        let Some(raw) = value.as_str() else {
            return Ok(None);
        };
        let parsed = DateTime::parse_from_rfc3339(raw).map_err(|e| {
            ConfigError::ParseError(format!("invalid theme timestamp '{raw}': {e}"))
        })?;
        Ok(Some(parsed.with_timezone(&Utc)))
    }
}
