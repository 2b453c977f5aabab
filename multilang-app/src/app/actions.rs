//! UI actions and commands
//!
//! A `Command` is what the user asked for; the service layer resolves it
//! into `UiAction`s, which are the only way UI state changes.

use libmultilang::LanguageCode;

/// User intents produced by the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push a screen onto the navigation stack
    Open(Screen),

    /// Pop the current screen
    Back,

    /// Move the language picker cursor
    PickerUp,
    PickerDown,

    /// Pick the language under the cursor
    PickerSelect,

    /// Pick a language directly
    SelectLanguage(LanguageCode),

    ToggleHelp,

    Quit,
}

/// State transitions of the UI reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    // === Navigation ===
    /// Push a route with an already translated title
    NavigateTo { screen: Screen, title: String },

    /// Pop the current route, the root stays
    Back,

    /// Retitle the current route
    SetTitle(String),

    // === Language picker ===
    /// Move the cursor to an absolute row
    PickerMoveTo(usize),

    /// Move the cursor by one row, bounded by `len`
    PickerStep { up: bool, len: usize },

    // === Overlays ===
    ShowHelp,
    HideHelp,

    // === Status bar ===
    SetStatus(String),
    ClearStatus,

    Quit,
}

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Settings,
    About,
}

impl Screen {
    /// Translation key of the screen's title, the home title is static
    pub fn title_key(&self) -> Option<&'static str> {
        match self {
            Screen::Home => None,
            Screen::Settings => Some("settings.title"),
            Screen::About => Some("about.title"),
        }
    }
}
