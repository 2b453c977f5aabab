//! Test application initialization
//!
//! Verifies the UI boots on the home screen with sensible defaults.

use multilang_app::app::{Screen, UiState, APP_TITLE};

#[test]
fn test_app_initializes_to_home_screen() {
    let state = UiState::new();

    assert_eq!(state.current_screen(), Screen::Home);
    assert_eq!(state.current().title, APP_TITLE);
    assert!(!state.can_go_back());
    assert!(!state.should_quit);
}

#[test]
fn test_help_hidden_by_default() {
    let state = UiState::new();

    assert!(!state.help_visible);
    assert!(state.status.is_none());
}

#[test]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = UiState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
fn test_custom_tick_rate() {
    std::env::set_var("MULTILANG_TICK_MS", "50");
    let state = UiState::new();
    std::env::remove_var("MULTILANG_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 50);
}
