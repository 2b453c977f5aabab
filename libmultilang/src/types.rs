//! Core types for multilang

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LocalizationError;

/// Two-letter language identifier (ISO 639-1 style, always lowercase)
///
/// Construction validates the shape only. Whether a code is known to the
/// localization subsystem is checked where the locale is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse a bare language code such as `"fr"` or `"FR"`
    pub fn parse(code: &str) -> Result<Self, LocalizationError> {
        let trimmed = code.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(LocalizationError::InvalidCode(code.to_string()))
        }
    }

    /// Derive a language code from a full locale tag
    ///
    /// Only the leading two characters are kept: `en-US`, `de_DE.UTF-8`
    /// and `fr` become `en`, `de` and `fr`.
    pub fn from_locale_tag(tag: &str) -> Result<Self, LocalizationError> {
        let prefix: String = tag.trim().chars().take(2).collect();
        Self::parse(&prefix).map_err(|_| LocalizationError::InvalidCode(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hard-coded fallback language
impl Default for LanguageCode {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl FromStr for LanguageCode {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LocalizationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
