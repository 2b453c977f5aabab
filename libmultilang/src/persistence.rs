//! Application state persistence
//!
//! Snapshots are TOML files wrapping the serialized `AppState`:
//!
//! ```toml
//! version = 1
//! saved_at = "2026-10-19T08:00:00Z"
//!
//! [state.settings]
//! language = "fr"
//! ```
//!
//! A `Persistor` task keeps the file current by watching the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{PersistenceError, Result};
use crate::store::{AppState, Store};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    saved_at: DateTime<Utc>,
    state: AppState,
}

/// File-backed snapshot storage
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state, `None` when nothing was saved yet
    pub fn load(&self) -> Result<Option<AppState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::Io(e).into()),
        };

        let snapshot: Snapshot = toml::from_str(&content).map_err(PersistenceError::Decode)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(snapshot.version).into());
        }

        debug!(path = %self.path.display(), saved_at = %snapshot.saved_at, "Snapshot loaded");
        Ok(Some(snapshot.state))
    }

    /// Write a snapshot, creating parent directories as needed
    pub fn save(&self, state: &AppState) -> Result<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            state: state.clone(),
        };
        let content = toml::to_string(&snapshot).map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(PersistenceError::Io)?;
        }
        std::fs::write(&self.path, content).map_err(PersistenceError::Io)?;

        debug!(path = %self.path.display(), "Snapshot saved");
        Ok(())
    }
}

/// Background task saving a snapshot after every state change
pub struct Persistor {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Persistor {
    /// Start watching `store`; must be called from within a Tokio runtime
    pub fn spawn(store: &Store, snapshots: SnapshotStore) -> Self {
        let token = CancellationToken::new();
        let mut changes = store.watch();
        let stop = token.clone();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = stop.cancelled() => break,
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
                let state = changes.borrow_and_update().clone();
                save_in_background(&snapshots, state).await;
            }

            // Final save so the last change survives shutdown
            let state = changes.borrow().clone();
            save_in_background(&snapshots, state).await;
            info!(path = %snapshots.path().display(), "Persistor stopped");
        });

        Self { token, handle }
    }

    /// Stop watching and flush the latest state
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            warn!(error = %e, "Persistor ended abnormally");
        }
    }
}

async fn save_in_background(snapshots: &SnapshotStore, state: AppState) {
    let snapshots = snapshots.clone();
    match tokio::task::spawn_blocking(move || snapshots.save(&state)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Failed to save snapshot"),
        Err(e) => warn!(error = %e, "Snapshot task failed"),
    }
}
