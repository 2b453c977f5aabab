//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Each action kind is a
//! variant with a fixed payload shape, so reducers and effects never have
//! to guess where a field lives.

use serde::{Deserialize, Serialize};

use crate::error::{MultilangError, Result};
use crate::types::LanguageCode;

/// Actions that trigger state transitions
///
/// Actions are immutable once created. On the wire the payload sits next
/// to the `type` tag: `{"type":"CHANGE_LANGUAGE","language":"de"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Dispatched once at launch when no state restoration is in progress
    Startup,

    /// Select the active language
    ///
    /// `None` only arises from a malformed payload (missing `language`).
    ChangeLanguage {
        #[serde(default)]
        language: Option<LanguageCode>,
    },
}

/// Action type identifier, used to route actions to effect bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Startup,
    ChangeLanguage,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Startup => "STARTUP",
            ActionKind::ChangeLanguage => "CHANGE_LANGUAGE",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Startup => ActionKind::Startup,
            Action::ChangeLanguage { .. } => ActionKind::ChangeLanguage,
        }
    }

    /// Decode an action from its JSON wire shape
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MultilangError::InvalidInput(format!("Malformed action: {}", e)))
    }

    /// Encode the action in its JSON wire shape
    pub fn to_json(&self) -> String {
        // Serializing a tagged enum of strings cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
