//! Live theme reload manager.
//!
//! Combines the preference watcher with snapshot loading so the shell can
//! re-apply the theme whenever the blob changes on disk. New snapshots are
//! published via a [`tokio::sync::watch`] channel; consumers apply them to
//! their engine through [`crate::snapshot::restore`].

use crate::store::PreferenceStore;
use crate::watcher::PrefsWatcher;
use opsdeck_theme::ThemeConfig;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live reload of the persisted theme configuration.
pub struct ReloadManager {
    prefs_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial snapshot and start watching for changes.
    ///
    /// Returns the initial configuration (defaults when nothing is
    /// persisted yet) and a watch receiver carrying each subsequent
    /// snapshot. The watcher runs in a background task.
    pub async fn start(prefs_path: PathBuf) -> (ThemeConfig, watch::Receiver<ThemeConfig>) {
        let initial = Self::load_snapshot(&prefs_path);

        let (config_tx, config_rx) = watch::channel(initial.clone());

        let watch_path = prefs_path.clone();
        tokio::spawn(async move {
            let manager = ReloadManager {
                prefs_path: watch_path,
            };
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    fn load_snapshot(path: &PathBuf) -> ThemeConfig {
        let store = PreferenceStore::new(path.clone());
        match store.load_theme_snapshot() {
            Ok(Some(config)) => config,
            Ok(None) => {
                info!("no theme snapshot at {}, using defaults", path.display());
                ThemeConfig::default()
            }
            Err(e) => {
                warn!("failed to load theme snapshot: {e}, using defaults");
                ThemeConfig::default()
            }
        }
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<ThemeConfig>) {
        let watcher = match PrefsWatcher::new(self.prefs_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create preference watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        let watcher_handle = tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("preference watcher stopped: {e}");
            }
        });

        while change_rx.recv().await.is_ok() {
            let config = Self::load_snapshot(&self.prefs_path);
            info!("theme snapshot reloaded");
            if config_tx.send(config).is_err() {
                // All receivers dropped; stop watching
                break;
            }
        }

        watcher_handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_theme::Palette;

    #[tokio::test]
    async fn start_returns_defaults_when_nothing_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let (initial, _rx) =
            ReloadManager::start(dir.path().join("preferences.json")).await;
        assert_eq!(initial, ThemeConfig::default());
    }

    #[tokio::test]
    async fn start_returns_persisted_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut config = ThemeConfig::default();
        config.palette = Palette::Forest;
        PreferenceStore::new(path.clone())
            .save_theme_snapshot(&config)
            .unwrap();

        let (initial, _rx) = ReloadManager::start(path).await;
        assert_eq!(initial.palette, Palette::Forest);
    }

    #[tokio::test]
    async fn receiver_sees_snapshot_written_after_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{}").unwrap();

        let (_initial, mut rx) = ReloadManager::start(path.clone()).await;

        // Give the watcher time to register before writing
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        let mut config = ThemeConfig::default();
        config.palette = Palette::Ocean;
        PreferenceStore::new(path)
            .save_theme_snapshot(&config)
            .unwrap();

        let changed =
            tokio::time::timeout(std::time::Duration::from_secs(5), rx.changed()).await;
        assert!(changed.is_ok(), "no snapshot update within timeout");
        assert_eq!(rx.borrow().palette, Palette::Ocean);
    }
}
