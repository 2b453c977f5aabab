//! In-process translation catalog
//!
//! Translation tables are TOML documents, one per locale. Nested tables
//! are flattened into dotted keys (`[home] welcome = ".."` becomes
//! `home.welcome`) and the top-level `id` holds the language's own name.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

use super::Localization;
use crate::error::LocalizationError;
use crate::types::LanguageCode;

const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("de", include_str!("../../locales/de.toml")),
    ("en", include_str!("../../locales/en.toml")),
    ("es", include_str!("../../locales/es.toml")),
    ("fr", include_str!("../../locales/fr.toml")),
];

/// Key holding a locale's display name
const NAME_KEY: &str = "id";

/// Catalog construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Locale used when nothing else matches
    pub default_locale: LanguageCode,
    /// Look missing keys up in the default locale
    pub fallbacks: bool,
    /// Start in the device locale when it has a table
    pub detect_device_locale: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            default_locale: LanguageCode::default(),
            fallbacks: true,
            detect_device_locale: false,
        }
    }
}

type Table = HashMap<String, String>;

/// Translation catalog with a mutable current locale
#[derive(Debug)]
pub struct Catalog {
    tables: BTreeMap<LanguageCode, Table>,
    default_locale: LanguageCode,
    fallbacks: bool,
    current: RwLock<LanguageCode>,
}

impl Catalog {
    /// Catalog over the bundled translations
    pub fn builtin(options: &CatalogOptions) -> Result<Self, LocalizationError> {
        Self::from_sources(BUILTIN_LOCALES.iter().copied(), options)
    }

    /// Catalog over `(locale, toml)` sources
    pub fn from_sources<'a, I>(sources: I, options: &CatalogOptions) -> Result<Self, LocalizationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut tables = BTreeMap::new();
        for (locale, source) in sources {
            let code = LanguageCode::parse(locale)?;
            tables.insert(code, parse_table(locale, source)?);
        }

        if !tables.contains_key(&options.default_locale) {
            return Err(LocalizationError::Catalog {
                locale: options.default_locale.to_string(),
                reason: "default locale has no translation table".to_string(),
            });
        }

        let device = if options.detect_device_locale {
            sys_locale::get_locale()
        } else {
            None
        };
        let known: Vec<LanguageCode> = tables.keys().cloned().collect();
        let current = resolve_initial_locale(device.as_deref(), &known, &options.default_locale);
        info!(locale = %current, known = known.len(), "Translation catalog loaded");

        Ok(Self {
            tables,
            default_locale: options.default_locale.clone(),
            fallbacks: options.fallbacks,
            current: RwLock::new(current),
        })
    }

    pub fn default_locale(&self) -> &LanguageCode {
        &self.default_locale
    }

    fn lookup(&self, locale: &LanguageCode, key: &str) -> Option<String> {
        self.tables.get(locale).and_then(|table| table.get(key)).cloned()
    }
}

impl Localization for Catalog {
    fn translate(&self, key: &str, locale: Option<&LanguageCode>) -> String {
        let locale = match locale {
            Some(locale) => locale.clone(),
            None => self.current_locale(),
        };

        if let Some(text) = self.lookup(&locale, key) {
            return text;
        }
        if self.fallbacks && locale != self.default_locale {
            if let Some(text) = self.lookup(&self.default_locale, key) {
                return text;
            }
        }
        format!("[missing \"{}.{}\" translation]", locale, key)
    }

    fn current_locale(&self) -> LanguageCode {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_current_locale(&self, locale: LanguageCode) -> Result<(), LocalizationError> {
        if !self.tables.contains_key(&locale) {
            return Err(LocalizationError::UnknownLocale(locale));
        }
        debug!(locale = %locale, "Current locale set");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale;
        Ok(())
    }

    fn known_locales(&self) -> Vec<LanguageCode> {
        self.tables.keys().cloned().collect()
    }

    fn language_name(&self, locale: &LanguageCode) -> Option<String> {
        self.lookup(locale, NAME_KEY)
    }

    fn is_known(&self, locale: &LanguageCode) -> bool {
        self.tables.contains_key(locale)
    }
}

/// Pick the launch locale: the device language when it has a table, else
/// the default
pub fn resolve_initial_locale(
    device: Option<&str>,
    known: &[LanguageCode],
    default_locale: &LanguageCode,
) -> LanguageCode {
    device
        .and_then(|tag| LanguageCode::from_locale_tag(tag).ok())
        .filter(|code| known.contains(code))
        .unwrap_or_else(|| default_locale.clone())
}

fn parse_table(locale: &str, source: &str) -> Result<Table, LocalizationError> {
    let document: toml::Table = source.parse().map_err(|e: toml::de::Error| LocalizationError::Catalog {
        locale: locale.to_string(),
        reason: e.to_string(),
    })?;

    let mut table = Table::new();
    flatten(locale, "", &document, &mut table)?;
    Ok(table)
}

fn flatten(
    locale: &str,
    prefix: &str,
    document: &toml::Table,
    out: &mut Table,
) -> Result<(), LocalizationError> {
    for (key, value) in document {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::String(text) => {
                out.insert(path, text.clone());
            }
            toml::Value::Table(nested) => flatten(locale, &path, nested, out)?,
            other => {
                return Err(LocalizationError::Catalog {
                    locale: locale.to_string(),
                    reason: format!("'{}' must be a string, found {}", path, other.type_str()),
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LanguageCode {
        s.parse().unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::builtin(&CatalogOptions::default()).unwrap()
    }

    #[test]
    fn test_builtin_locales() {
        let catalog = catalog();
        assert_eq!(
            catalog.known_locales(),
            vec![code("de"), code("en"), code("es"), code("fr")]
        );
        assert_eq!(catalog.current_locale(), code("en"));
    }

    #[test]
    fn test_translate_with_explicit_locale() {
        let catalog = catalog();
        assert_eq!(catalog.translate("settings.title", Some(&code("fr"))), "Réglages");
        // Explicit locale does not move the current one
        assert_eq!(catalog.current_locale(), code("en"));
        assert_eq!(catalog.translate("settings.title", None), "Settings");
    }

    #[test]
    fn test_missing_key_falls_back_to_default_locale() {
        let catalog = catalog();
        let text = catalog.translate("about.explanation", Some(&code("fr")));
        assert_eq!(text, catalog.translate("about.explanation", Some(&code("en"))));
    }

    #[test]
    fn test_missing_key_without_fallbacks() {
        let options = CatalogOptions {
            fallbacks: false,
            ..CatalogOptions::default()
        };
        let catalog = Catalog::builtin(&options).unwrap();
        assert_eq!(
            catalog.translate("about.explanation", Some(&code("fr"))),
            "[missing \"fr.about.explanation\" translation]"
        );
    }

    #[test]
    fn test_unknown_locale_is_rejected_and_previous_kept() {
        let catalog = catalog();
        catalog.set_current_locale(code("de")).unwrap();

        let err = catalog.set_current_locale(code("nl")).unwrap_err();
        assert_eq!(err, LocalizationError::UnknownLocale(code("nl")));
        assert_eq!(catalog.current_locale(), code("de"));
    }

    #[test]
    fn test_language_names() {
        let catalog = catalog();
        assert_eq!(catalog.language_name(&code("de")).as_deref(), Some("Deutsch"));
        assert_eq!(catalog.language_name(&code("nl")), None);
    }

    #[test]
    fn test_resolve_initial_locale() {
        let known = vec![code("en"), code("fr")];
        let default_locale = code("en");

        assert_eq!(resolve_initial_locale(Some("fr-CA"), &known, &default_locale), code("fr"));
        assert_eq!(resolve_initial_locale(Some("ja-JP"), &known, &default_locale), code("en"));
        assert_eq!(resolve_initial_locale(Some("C"), &known, &default_locale), code("en"));
        assert_eq!(resolve_initial_locale(None, &known, &default_locale), code("en"));
    }

    #[test]
    fn test_default_locale_must_have_table() {
        let options = CatalogOptions {
            default_locale: code("nl"),
            ..CatalogOptions::default()
        };
        assert!(matches!(
            Catalog::builtin(&options),
            Err(LocalizationError::Catalog { .. })
        ));
    }

    #[test]
    fn test_non_string_entries_are_rejected() {
        let result = Catalog::from_sources(
            [("en", "id = \"English\"\n[home]\nwelcome = 3\n")],
            &CatalogOptions::default(),
        );
        match result {
            Err(LocalizationError::Catalog { locale, reason }) => {
                assert_eq!(locale, "en");
                assert!(reason.contains("home.welcome"));
            }
            other => panic!("expected catalog error, got {:?}", other),
        }
    }
}
