//! Pure reducer for UI state transitions
//!
//! `(UiState, UiAction) -> UiState`, no I/O. Translating titles and
//! talking to the core happen in the service layer before an action
//! reaches this function.

use super::actions::UiAction;
use super::state::{Route, UiState};

pub fn reduce(state: UiState, action: UiAction) -> UiState {
    match action {
        // === Navigation ===
        UiAction::NavigateTo { screen, title } => {
            let mut routes = state.routes;
            routes.push(Route { screen, title });
            UiState {
                routes,
                help_visible: false,
                ..state
            }
        }

        UiAction::Back => {
            if !state.can_go_back() {
                return state;
            }
            let mut routes = state.routes;
            routes.pop();
            UiState { routes, ..state }
        }

        UiAction::SetTitle(title) => {
            let mut routes = state.routes;
            if let Some(route) = routes.last_mut() {
                route.title = title;
            }
            UiState { routes, ..state }
        }

        // === Language picker ===
        UiAction::PickerMoveTo(index) => UiState {
            picker_index: index,
            ..state
        },

        UiAction::PickerStep { up, len } => {
            let picker_index = if len == 0 {
                0
            } else if up {
                state.picker_index.saturating_sub(1)
            } else {
                (state.picker_index + 1).min(len - 1)
            };
            UiState {
                picker_index,
                ..state
            }
        }

        // === Overlays ===
        UiAction::ShowHelp => UiState {
            help_visible: true,
            ..state
        },

        UiAction::HideHelp => UiState {
            help_visible: false,
            ..state
        },

        // === Status bar ===
        UiAction::SetStatus(message) => UiState {
            status: Some(message),
            ..state
        },

        UiAction::ClearStatus => UiState {
            status: None,
            ..state
        },

        UiAction::Quit => UiState {
            should_quit: true,
            ..state
        },
    }
}
