//! Multilang - runtime language switching core
//!
//! An action/reducer store for application settings, effect processes
//! that keep the localization subsystem's locale in line with the store,
//! and a latest-wins effect scheduler tying the two together.

pub mod config;
pub mod effects;
pub mod error;
pub mod localization;
pub mod logging;
pub mod persistence;
pub mod runtime;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use effects::{EffectScheduler, Startup, UpdateLanguage};
pub use error::{MultilangError, Result};
pub use localization::{Catalog, CatalogOptions, Localization};
pub use runtime::Runtime;
pub use store::{Action, ActionKind, AppState, Store};
pub use types::LanguageCode;
