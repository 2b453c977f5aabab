//! Application state
//!
//! Immutable state values. Every transition goes through the reducer
//! (see `reducer.rs`) and produces a new `AppState`.

use serde::{Deserialize, Serialize};

use crate::localization::Localization;
use crate::types::LanguageCode;

/// Root application state
///
/// The single source of truth, keyed by domain. Owned exclusively by the
/// `Store`; everybody else works on snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub settings: SettingsState,

    #[serde(default)]
    pub startup: StartupState,
}

/// Settings domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    /// Active language
    pub language: LanguageCode,
}

/// Startup domain
///
/// Carries no data: a dispatched `STARTUP` action is the whole signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupState {}

impl SettingsState {
    /// Seed settings from the locale the localization subsystem detected
    pub fn initial(localization: &dyn Localization) -> Self {
        Self {
            language: localization.current_locale(),
        }
    }
}

impl AppState {
    /// Create the launch snapshot
    pub fn initial(localization: &dyn Localization) -> Self {
        Self {
            settings: SettingsState::initial(localization),
            startup: StartupState::default(),
        }
    }

    /// Convenience constructor with an explicit language
    pub fn with_language(language: LanguageCode) -> Self {
        Self {
            settings: SettingsState { language },
            startup: StartupState::default(),
        }
    }
}
