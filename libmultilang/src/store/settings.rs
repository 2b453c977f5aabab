//! Settings store: language selection
//!
//! Reducer, action creator and selector for the `settings` domain.

use super::actions::Action;
use super::state::{AppState, SettingsState};
use crate::types::LanguageCode;

/// Action creator for `CHANGE_LANGUAGE`
pub fn change_language(language: LanguageCode) -> Action {
    Action::ChangeLanguage {
        language: Some(language),
    }
}

/// Select the active language from a state snapshot
pub fn select_language(state: &AppState) -> LanguageCode {
    state.settings.language.clone()
}

/// Pure reducer for the settings domain
///
/// A `CHANGE_LANGUAGE` without a language leaves the state untouched, so
/// `language` always names a concrete locale.
pub fn reduce(state: SettingsState, action: &Action) -> SettingsState {
    match action {
        Action::ChangeLanguage {
            language: Some(language),
        } => {
            // Owned value: any other settings fields carry over untouched
            let mut next = state;
            next.language = language.clone();
            next
        }
        Action::ChangeLanguage { language: None } => state,
        Action::Startup => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LanguageCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_change_language_replaces_language() {
        let state = SettingsState { language: code("en") };

        for target in ["en", "de", "fr", "es", "nl"] {
            let new_state = reduce(state.clone(), &change_language(code(target)));
            assert_eq!(new_state.language, code(target));
        }
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = SettingsState { language: code("en") };
        let snapshot = state.clone();

        let new_state = reduce(state.clone(), &change_language(code("de")));

        assert_eq!(state, snapshot);
        assert_eq!(new_state.language, code("de"));
    }

    #[test]
    fn test_change_language_is_idempotent() {
        let action = change_language(code("fr"));
        let once = reduce(SettingsState { language: code("en") }, &action);
        let twice = reduce(once.clone(), &action);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_language_keeps_state() {
        let state = SettingsState { language: code("es") };
        let new_state = reduce(state.clone(), &Action::ChangeLanguage { language: None });
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_startup_does_not_touch_settings() {
        let state = SettingsState { language: code("fr") };
        assert_eq!(reduce(state.clone(), &Action::Startup), state);
    }

    #[test]
    fn test_select_language() {
        let state = AppState::with_language(code("de"));
        assert_eq!(select_language(&state), code("de"));
    }
}
