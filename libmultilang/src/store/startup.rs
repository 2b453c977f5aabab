//! Startup store
//!
//! Exists so `STARTUP` is an addressable action for the startup effect.

use super::actions::Action;
use super::state::StartupState;

/// Action creator for `STARTUP`
pub fn startup() -> Action {
    Action::Startup
}

/// Identity transition: startup carries no state
pub fn reduce(state: StartupState, _action: &Action) -> StartupState {
    state
}
