//! UI state
//!
//! Everything the screens need that is not application state. The active
//! language lives in the core store, not here.

use super::actions::Screen;

/// Static title of the root screen
pub const APP_TITLE: &str = "Multi Language Sample App";

/// Root UI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Navigation stack, never empty
    pub routes: Vec<Route>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Row under the language picker cursor
    pub picker_index: usize,

    /// Status bar message
    pub status: Option<String>,

    pub config: UiConfig,
}

/// One entry of the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            routes: vec![Route {
                screen: Screen::Home,
                title: APP_TITLE.to_string(),
            }],
            help_visible: false,
            picker_index: 0,
            status: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("MULTILANG_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("MULTILANG_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(250);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route on top of the stack
    pub fn current(&self) -> &Route {
        // The reducer never pops the root route
        &self.routes[self.routes.len() - 1]
    }

    pub fn current_screen(&self) -> Screen {
        self.current().screen
    }

    pub fn can_go_back(&self) -> bool {
        self.routes.len() > 1
    }
}
