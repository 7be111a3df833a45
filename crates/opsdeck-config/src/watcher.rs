//! Preference file watcher.
//!
//! Uses the `notify` crate to watch the preference blob for changes, with
//! a 500ms debounce so atomic saves (write + rename) trigger one reload.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use opsdeck_common::ConfigError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Watches the preference file and signals on change.
pub struct PrefsWatcher {
    path: PathBuf,
}

impl PrefsWatcher {
    /// Create a watcher for the given preference file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "preference file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// Watch the preference file, sending `()` on the broadcast channel
    /// for each debounced change. Runs until the channel closes.
    ///
    /// The parent directory is watched rather than the file itself, so
    /// editors and stores that replace the file atomically still signal.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let path = self.path.clone();
        let watch_path = path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| path.clone());

        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting preference watcher for {}", path.display());

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        let _watcher = {
            let file_name = file_name.clone();
            let notify_tx = notify_tx.clone();

            let mut watcher = RecommendedWatcher::new(
                move |result: Result<Event, notify::Error>| match result {
                    Ok(event) => {
                        let relevant =
                            matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
                        if !relevant {
                            return;
                        }

                        let is_our_file = event
                            .paths
                            .iter()
                            .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));

                        if is_our_file {
                            debug!("preference file change detected");
                            let _ = notify_tx.try_send(());
                        }
                    }
                    Err(e) => {
                        error!("preference watcher error: {e}");
                    }
                },
                notify::Config::default(),
            )
            .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

            watcher
                .watch(&watch_path, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!(
                        "failed to watch {}: {e}",
                        watch_path.display()
                    ))
                })?;

            Arc::new(watcher)
        };

        // Keep the watcher alive for the duration of the loop
        let _watcher_ref = _watcher;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Debounce: coalesce further signals within 500ms
            let debounce = tokio::time::sleep(std::time::Duration::from_millis(500));
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("preference file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for preference reload signal");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let watcher = PrefsWatcher::new(dir.path().join("preferences.json"));
        assert!(watcher.is_ok());
    }

    #[tokio::test]
    async fn watch_signals_on_file_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{}").unwrap();

        let watcher = PrefsWatcher::new(path.clone()).unwrap();
        let (tx, mut rx) = broadcast::channel(16);

        let handle = tokio::spawn(async move {
            let _ = watcher.watch(tx).await;
        });

        // Give the watcher time to register before writing
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        std::fs::write(&path, "{\"k\": 1}").unwrap();

        let signal =
            tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv()).await;
        assert!(signal.is_ok(), "no reload signal within timeout");

        handle.abort();
    }
}
