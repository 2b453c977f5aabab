//! Localization subsystem
//!
//! The store never calls [`Localization::translate`]; that belongs to the
//! presentation layer. The settings effect is the only writer of the
//! current locale.
//!
//! # Example
//!
//! ```
//! use libmultilang::localization::{Catalog, CatalogOptions, Localization};
//!
//! let catalog = Catalog::builtin(&CatalogOptions::default()).unwrap();
//! catalog.set_current_locale("de".parse().unwrap()).unwrap();
//! assert_eq!(catalog.translate("settings.title", None), "Einstellungen");
//! ```

pub mod catalog;

pub use catalog::{Catalog, CatalogOptions};

use crate::error::LocalizationError;
use crate::types::LanguageCode;

/// Boundary contract for the translation lookup subsystem
pub trait Localization: Send + Sync {
    /// Translate `key`, in `locale` when given, else in the current locale
    fn translate(&self, key: &str, locale: Option<&LanguageCode>) -> String;

    /// The process-wide active locale
    fn current_locale(&self) -> LanguageCode;

    /// Switch the active locale
    ///
    /// Unknown locales are rejected and the previous locale stays active.
    fn set_current_locale(&self, locale: LanguageCode) -> Result<(), LocalizationError>;

    /// Every locale with a translation table, sorted
    fn known_locales(&self) -> Vec<LanguageCode>;

    /// Display name of a locale in its own language (for pickers)
    fn language_name(&self, locale: &LanguageCode) -> Option<String>;

    fn is_known(&self, locale: &LanguageCode) -> bool {
        self.known_locales().contains(locale)
    }
}
