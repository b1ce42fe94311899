use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use superdrag_common::ConfigError;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Quiet period that must pass before a burst of file events is reported.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the settings file and reports debounced change signals.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "settings file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Ok(Self { path })
    }

    /// Whether a raw notify event touches the watched file.
    pub(crate) fn is_relevant(&self, event: &Event) -> bool {
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return false;
        }
        let file_name = self.path.file_name();
        event.paths.iter().any(|p| p.file_name() == file_name)
    }

    /// Run until `tx` is dropped, sending `()` once per debounced burst.
    pub async fn watch(self, tx: mpsc::Sender<()>) -> Result<(), ConfigError> {
        let dir = self
            .path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let (raw_tx, mut raw_rx) = mpsc::channel::<Event>(32);
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    let _ = raw_tx.try_send(event);
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;

        info!("watching settings file {}", self.path.display());

        while let Some(event) = raw_rx.recv().await {
            if !self.is_relevant(&event) {
                continue;
            }
            debug!("settings file event, debouncing");

            let quiet = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(quiet);
            loop {
                tokio::select! {
                    _ = &mut quiet => break,
                    more = raw_rx.recv() => match more {
                        Some(event) if self.is_relevant(&event) => {
                            quiet.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
                        }
                        Some(_) => {}
                        None => return Ok(()),
                    },
                }
            }

            if tx.send(()).await.is_err() {
                debug!("settings change receiver dropped, stopping watcher");
                break;
            }
        }

        drop(watcher);
        Ok(())
    }
}
