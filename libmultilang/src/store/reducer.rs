//! Root reducer
//!
//! `(AppState, &Action) -> AppState`, built from the domain reducers.
//! No I/O and no side effects happen here; effects observe the action
//! after it has been reduced.

use super::actions::Action;
use super::state::AppState;
use super::{settings, startup};

/// Pure root reducer
///
/// Each domain reducer receives its own slice and the result is
/// reassembled into a fresh `AppState`.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    AppState {
        settings: settings::reduce(state.settings, action),
        startup: startup::reduce(state.startup, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::settings::change_language;

    #[test]
    fn test_change_language_routes_to_settings() {
        let state = AppState::with_language("en".parse().unwrap());
        let new_state = reduce(state, &change_language("de".parse().unwrap()));
        assert_eq!(new_state.settings.language.as_str(), "de");
    }

    #[test]
    fn test_startup_leaves_state_equal() {
        let state = AppState::with_language("fr".parse().unwrap());
        assert_eq!(reduce(state.clone(), &Action::Startup), state);
    }
}
