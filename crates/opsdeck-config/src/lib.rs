//! Opsdeck persisted-state boundary.
//!
//! The theme engine never reads or writes storage; this crate is the
//! surrounding shell's side of that contract. It persists the theme
//! snapshot (plus any other dashboard preference) to a JSON key-value
//! blob, keeps feature flags in a TOML file, and offers live reload of
//! the theme when the blob changes on disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use opsdeck_config::{load_theme_config, snapshot};
//! use opsdeck_theme::ThemeEngine;
//!
//! let config = load_theme_config();
//! let mut engine = ThemeEngine::new();
//! snapshot::restore(&mut engine, &config);
//! ```

pub mod flags;
pub mod reload;
pub mod snapshot;
pub mod store;
pub mod watcher;

pub use flags::FeatureFlags;
pub use reload::ReloadManager;
pub use store::{PreferenceStore, THEME_CONFIG_KEY, THEME_UPDATED_AT_KEY};
pub use watcher::PrefsWatcher;

use opsdeck_theme::ThemeConfig;
use tracing::warn;

/// Load the persisted theme configuration from the default path.
///
/// Any failure (no config directory, missing snapshot, malformed blob)
/// falls back to defaults with a warning; the dashboard always starts.
pub fn load_theme_config() -> ThemeConfig {
    let store = match PreferenceStore::at_default_path() {
        Ok(store) => store,
        Err(e) => {
            warn!("could not resolve preference path: {e}, using defaults");
            return ThemeConfig::default();
        }
    };

    match store.load_theme_snapshot() {
        Ok(Some(config)) => config,
        Ok(None) => ThemeConfig::default(),
        Err(e) => {
            warn!("failed to load theme snapshot: {e}, using defaults");
            ThemeConfig::default()
        }
    }
}
