//! Error types for multilang

use thiserror::Error;

use crate::types::LanguageCode;

pub type Result<T> = std::result::Result<T, MultilangError>;

#[derive(Error, Debug)]
pub enum MultilangError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Localization error: {0}")]
    Localization(#[from] LocalizationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MultilangError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MultilangError::InvalidInput(_) => 3,
            MultilangError::Config(_) => 2,
            MultilangError::Persistence(_) => 1,
            MultilangError::Localization(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(LanguageCode),

    #[error("Invalid language code '{0}': expected two ASCII letters")]
    InvalidCode(String),

    #[error("Invalid translation catalog for '{locale}': {reason}")]
    Catalog { locale: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = MultilangError::InvalidInput("unknown command".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = MultilangError::Config(ConfigError::MissingField("i18n".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_runtime_errors() {
        let persistence = MultilangError::Persistence(PersistenceError::UnsupportedVersion(9));
        assert_eq!(persistence.exit_code(), 1);

        let localization =
            MultilangError::Localization(LocalizationError::InvalidCode("xyz".to_string()));
        assert_eq!(localization.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = MultilangError::Config(ConfigError::InvalidValue {
            field: "i18n.default_locale".to_string(),
            reason: "expected two ASCII letters".to_string(),
        });
        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid value for i18n.default_locale: expected two ASCII letters"
        );
    }

    #[test]
    fn test_unknown_locale_formatting() {
        let code: LanguageCode = "nl".parse().unwrap();
        let error = MultilangError::from(LocalizationError::UnknownLocale(code));
        assert_eq!(format!("{}", error), "Localization error: Unknown locale: nl");
    }

    #[test]
    fn test_error_conversion_from_persistence_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: MultilangError = PersistenceError::Io(io_error).into();

        match error {
            MultilangError::Persistence(PersistenceError::Io(_)) => {}
            _ => panic!("Expected MultilangError::Persistence"),
        }
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let message = format!("{}", ConfigError::ReadError(io_error));
        assert!(message.contains("Failed to read config file"));
    }
}
