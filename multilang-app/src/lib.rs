//! multilang-app library
//!
//! Terminal frontend for the multilang core. Exported for testing.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

pub use app::{reduce, Command, Screen, UiAction, UiState};
pub use error::{AppError, Result};
pub use services::ServiceHandle;
