//! Screen content
//!
//! Which text each screen shows, in which locale. Layout and styling live
//! in the parent module.

use libmultilang::localization::Localization;
use libmultilang::LanguageCode;

use crate::app::Screen;

/// What the screens read from the core for one frame
pub struct View<'a> {
    /// Language held by the store
    pub language: LanguageCode,
    pub localization: &'a dyn Localization,
    /// Known locales and display names, picker order
    pub languages: Vec<(LanguageCode, String)>,
}

impl<'a> View<'a> {
    pub fn new(language: LanguageCode, localization: &'a dyn Localization) -> Self {
        let languages = localization
            .known_locales()
            .into_iter()
            .map(|code| {
                let name = localization
                    .language_name(&code)
                    .unwrap_or_else(|| code.to_string());
                (code, name)
            })
            .collect();
        Self {
            language,
            localization,
            languages,
        }
    }

    /// Translate in the store's language
    fn stored(&self, key: &str) -> String {
        self.localization.translate(key, Some(&self.language))
    }

    /// Translate in the subsystem's current locale
    fn current(&self, key: &str) -> String {
        self.localization.translate(key, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub hotkey: char,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeContent {
    pub welcome: String,
    pub instruction: String,
    pub buttons: Vec<Button>,
}

pub fn home(view: &View<'_>) -> HomeContent {
    let go_to = view.stored("home.go_to").to_uppercase();
    let button = |hotkey, screen: Screen| Button {
        hotkey,
        label: format!(
            "{} {}",
            go_to,
            screen
                .title_key()
                .map(|key| view.stored(key))
                .unwrap_or_default()
                .to_uppercase()
        ),
    };

    HomeContent {
        welcome: view.stored("home.welcome"),
        instruction: view.stored("home.instruction"),
        buttons: vec![button('s', Screen::Settings), button('a', Screen::About)],
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsContent {
    pub heading: String,
    /// Display names, picker order
    pub options: Vec<String>,
    /// Row of the store's language
    pub selected: Option<usize>,
}

pub fn settings(view: &View<'_>) -> SettingsContent {
    SettingsContent {
        heading: view.current("settings.language"),
        options: view.languages.iter().map(|(_, name)| name.clone()).collect(),
        selected: view
            .languages
            .iter()
            .position(|(code, _)| *code == view.language),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
    pub info: String,
    pub explanation: String,
}

pub fn about(view: &View<'_>) -> AboutContent {
    AboutContent {
        info: view.current("about.info"),
        explanation: view.current("about.explanation"),
    }
}
