//! Locale synchronization tests
//!
//! Drive the store and the root effect bindings together and check what
//! the localization subsystem ends up with.

use anyhow::Result;
use libmultilang::effects::root;
use libmultilang::error::LocalizationError;
use libmultilang::localization::{Catalog, CatalogOptions, Localization};
use libmultilang::store::settings::change_language;
use libmultilang::store::startup::startup;
use libmultilang::{Action, AppState, LanguageCode, Store};
use std::sync::{Arc, Mutex};

/// Localization wrapper recording every accepted locale write
struct Recording {
    inner: Catalog,
    writes: Mutex<Vec<String>>,
}

impl Recording {
    fn new() -> Result<Arc<Self>> {
        Ok(Arc::new(Self {
            inner: Catalog::builtin(&CatalogOptions::default())?,
            writes: Mutex::new(Vec::new()),
        }))
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Localization for Recording {
    fn translate(&self, key: &str, locale: Option<&LanguageCode>) -> String {
        self.inner.translate(key, locale)
    }

    fn current_locale(&self) -> LanguageCode {
        self.inner.current_locale()
    }

    fn set_current_locale(&self, locale: LanguageCode) -> Result<(), LocalizationError> {
        let tag = locale.to_string();
        self.inner.set_current_locale(locale)?;
        self.writes.lock().unwrap().push(tag);
        Ok(())
    }

    fn known_locales(&self) -> Vec<LanguageCode> {
        self.inner.known_locales()
    }

    fn language_name(&self, locale: &LanguageCode) -> Option<String> {
        self.inner.language_name(locale)
    }
}

fn code(s: &str) -> LanguageCode {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_startup_redispatches_stored_language() -> Result<()> {
    let localization = Recording::new()?;
    let store = Store::new(AppState::with_language(code("en")));
    let mut actions = store.subscribe();
    let scheduler = root(&store, localization.clone());

    store.dispatch(startup());
    scheduler.wait_idle().await;

    assert_eq!(actions.try_recv()?, Action::Startup);
    assert_eq!(actions.try_recv()?, change_language(code("en")));
    assert!(actions.try_recv().is_err());
    assert_eq!(localization.current_locale(), code("en"));
    assert_eq!(localization.writes(), vec!["en".to_string()]);

    scheduler.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_startup_overrides_detected_locale() -> Result<()> {
    let localization = Recording::new()?;
    assert_eq!(localization.current_locale(), code("en"));

    let store = Store::new(AppState::with_language(code("fr")));
    let scheduler = root(&store, localization.clone());

    store.dispatch(startup());
    scheduler.wait_idle().await;

    assert_eq!(localization.current_locale(), code("fr"));
    scheduler.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_change_language_updates_state_and_locale() -> Result<()> {
    let localization = Recording::new()?;
    let store = Store::new(AppState::with_language(code("en")));
    let scheduler = root(&store, localization.clone());

    store.dispatch(change_language(code("de")));
    assert_eq!(store.state().settings.language, code("de"));

    scheduler.wait_idle().await;
    assert_eq!(localization.current_locale(), code("de"));
    assert_eq!(localization.translate("settings.title", None), "Einstellungen");

    scheduler.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_rapid_toggling_ends_on_latest() -> Result<()> {
    let localization = Recording::new()?;
    let store = Store::new(AppState::with_language(code("de")));
    let scheduler = root(&store, localization.clone());

    for language in ["en", "fr", "de", "en", "es"] {
        store.dispatch(change_language(code(language)));
    }
    scheduler.wait_idle().await;

    assert_eq!(localization.current_locale(), code("es"));
    assert_eq!(store.state().settings.language, code("es"));
    assert_eq!(localization.writes().last().map(String::as_str), Some("es"));

    scheduler.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_unknown_locale_keeps_previous() -> Result<()> {
    let localization = Recording::new()?;
    let store = Store::new(AppState::with_language(code("en")));
    let scheduler = root(&store, localization.clone());

    store.dispatch(change_language(code("de")));
    scheduler.wait_idle().await;
    store.dispatch(change_language(code("nl")));
    scheduler.wait_idle().await;

    // The store takes the value as given, the subsystem keeps its locale
    assert_eq!(store.state().settings.language, code("nl"));
    assert_eq!(localization.current_locale(), code("de"));
    assert_eq!(
        localization.translate("home.welcome", Some(&code("nl"))),
        localization.translate("home.welcome", Some(&code("en")))
    );

    scheduler.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn test_malformed_change_language_is_harmless() -> Result<()> {
    let localization = Recording::new()?;
    let store = Store::new(AppState::with_language(code("es")));
    let scheduler = root(&store, localization.clone());

    store.dispatch(Action::from_json(r#"{"type":"CHANGE_LANGUAGE"}"#)?);
    scheduler.wait_idle().await;

    assert_eq!(store.state().settings.language, code("es"));
    assert_eq!(localization.current_locale(), code("en"));
    assert!(localization.writes().is_empty());

    scheduler.shutdown().await;
    Ok(())
}
