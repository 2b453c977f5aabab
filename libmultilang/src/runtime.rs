//! Process bootstrap
//!
//! Wires the store, the effect scheduler, the localization subsystem and
//! (optionally) persistence together in launch order.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::effects::{root, EffectScheduler};
use crate::error::Result;
use crate::localization::Localization;
use crate::persistence::{Persistor, SnapshotStore};
use crate::store::settings::change_language;
use crate::store::startup::startup;
use crate::store::{AppState, Store};
use crate::types::LanguageCode;

/// A launched application core
pub struct Runtime {
    store: Store,
    localization: Arc<dyn Localization>,
    scheduler: EffectScheduler,
    persistor: Option<Persistor>,
}

impl Runtime {
    /// Launch the core
    ///
    /// 1. Seed state from the locale the localization subsystem detected
    /// 2. Restore the last snapshot when persistence is active
    /// 3. Register the effect bindings
    /// 4. Dispatch `STARTUP` unless persistence is active
    /// 5. Start saving snapshots when persistence is active
    ///
    /// Must be called from within a Tokio runtime.
    pub fn launch(config: &Config, localization: Arc<dyn Localization>) -> Result<Self> {
        let restoring = config.persistence.active;
        let store = Store::new(AppState::initial(localization.as_ref()));

        let snapshots = if restoring {
            let snapshots = SnapshotStore::new(config.snapshot_path()?);
            match snapshots.load() {
                Ok(Some(state)) => {
                    info!(
                        path = %snapshots.path().display(),
                        language = %state.settings.language,
                        "Restored application state"
                    );
                    store.replace_state(state);
                }
                Ok(None) => info!(path = %snapshots.path().display(), "No snapshot to restore"),
                Err(e) => warn!(error = %e, "Ignoring unreadable snapshot"),
            }
            Some(snapshots)
        } else {
            None
        };

        let scheduler = root(&store, Arc::clone(&localization));

        if restoring {
            info!("State restoration active, skipping startup");
        } else {
            store.dispatch(startup());
        }

        let persistor = snapshots.map(|snapshots| Persistor::spawn(&store, snapshots));

        Ok(Self {
            store,
            localization,
            scheduler,
            persistor,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn localization(&self) -> &Arc<dyn Localization> {
        &self.localization
    }

    /// Language held by the store
    pub fn language(&self) -> LanguageCode {
        self.store.state().settings.language
    }

    /// Presentation intent: switch the active language
    pub fn change_language(&self, language: LanguageCode) {
        self.store.dispatch(change_language(language));
    }

    /// Wait until every dispatched action's effect has ended
    pub async fn settle(&self) {
        self.scheduler.wait_idle().await;
    }

    /// Stop effects, then flush the final snapshot
    pub async fn shutdown(self) {
        self.scheduler.shutdown().await;
        if let Some(persistor) = self.persistor {
            persistor.shutdown().await;
        }
        info!("Runtime stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{Catalog, CatalogOptions};

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::builtin(&CatalogOptions::default()).unwrap())
    }

    #[tokio::test]
    async fn test_launch_seeds_state_from_detected_locale() {
        let catalog = catalog();
        catalog.set_current_locale("es".parse().unwrap()).unwrap();

        let runtime = Runtime::launch(&Config::default(), catalog.clone()).unwrap();
        assert_eq!(runtime.scheduler.pending(), 1);
        runtime.settle().await;

        assert_eq!(runtime.language().as_str(), "es");
        assert_eq!(catalog.current_locale().as_str(), "es");
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_change_language_reaches_localization() {
        let catalog = catalog();
        let runtime = Runtime::launch(&Config::default(), catalog.clone()).unwrap();

        runtime.change_language("fr".parse().unwrap());
        runtime.settle().await;

        assert_eq!(runtime.language().as_str(), "fr");
        assert_eq!(runtime.localization().current_locale().as_str(), "fr");
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_restoration_suppresses_startup() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.persistence.active = true;
        config.persistence.path = Some(
            temp_dir
                .path()
                .join("state.toml")
                .to_string_lossy()
                .into_owned(),
        );

        // Runs only start at the next await, so a dispatched STARTUP
        // would still be pending here
        let runtime = Runtime::launch(&config, catalog()).unwrap();
        assert_eq!(runtime.scheduler.pending(), 0);
        runtime.settle().await;
        runtime.shutdown().await;
    }
}
