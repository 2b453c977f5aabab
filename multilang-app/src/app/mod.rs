//! Application module
//!
//! - Commands: what the user asked for
//! - Actions: what changes in the UI
//! - State: what is on screen right now
//! - Reducer: pure function (State, Action) -> State
//!
//! The core store holds the active language; this module only tracks
//! navigation and widgets.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

pub use actions::{Command, Screen, UiAction};
pub use event::{keymap, EventHandler, TuiEvent};
pub use reducer::reduce;
pub use state::{Route, UiConfig, UiState, APP_TITLE};
