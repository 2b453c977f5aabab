//! Core adapter for the TUI
//!
//! Bridges the synchronous draw/poll loop and the async core.
//!
//! # Architecture
//!
//! - `ServiceHandle`: owns a Tokio runtime and the launched core `Runtime`
//! - `execute`: resolves a `Command` into `UiAction`s, dispatching to the
//!   core store where the command changes application state
//! - Every dispatch is followed by a settle, so the next frame already
//!   shows the synchronized locale
//!
//! # Example
//!
//! ```no_run
//! use multilang_app::app::{Command, Screen, UiState};
//! use multilang_app::services::ServiceHandle;
//!
//! # fn example() -> multilang_app::error::Result<()> {
//! let services = ServiceHandle::new(&libmultilang::Config::default())?;
//! let actions = services.execute(&UiState::new(), Command::Open(Screen::Settings));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use libmultilang::localization::{Catalog, Localization};
use libmultilang::{Config, LanguageCode, Runtime};
use tracing::{debug, info};

use crate::app::{Command, Screen, UiAction, UiState};
use crate::error::Result;

pub struct ServiceHandle {
    core: Runtime,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Launch the core with the bundled catalog
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = Catalog::builtin(&config.catalog_options())
            .map_err(libmultilang::MultilangError::from)?;
        Self::with_localization(config, Arc::new(catalog))
    }

    /// Launch the core against any localization subsystem
    pub fn with_localization(config: &Config, localization: Arc<dyn Localization>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let core = {
            let _guard = runtime.enter();
            Runtime::launch(config, localization)?
        };
        runtime.block_on(core.settle());
        info!(language = %core.language(), "Core launched");

        Ok(Self { core, runtime })
    }

    /// Language held by the core store
    pub fn language(&self) -> LanguageCode {
        self.core.language()
    }

    pub fn localization(&self) -> &Arc<dyn Localization> {
        self.core.localization()
    }

    /// Known locales with their display names, in picker order
    pub fn languages(&self) -> Vec<(LanguageCode, String)> {
        let localization = self.localization();
        localization
            .known_locales()
            .into_iter()
            .map(|code| {
                let name = localization
                    .language_name(&code)
                    .unwrap_or_else(|| code.to_string());
                (code, name)
            })
            .collect()
    }

    /// Translate with the store's language
    fn translate_stored(&self, key: &str) -> String {
        self.localization().translate(key, Some(&self.language()))
    }

    /// Resolve a command into UI actions
    pub fn execute(&self, state: &UiState, command: Command) -> Vec<UiAction> {
        debug!(?command, "Executing command");
        match command {
            Command::Quit => vec![UiAction::Quit],
            Command::Back => vec![UiAction::Back, UiAction::ClearStatus],
            Command::ToggleHelp if state.help_visible => vec![UiAction::HideHelp],
            Command::ToggleHelp => vec![UiAction::ShowHelp],
            Command::Open(screen) => self.open(screen),
            Command::PickerUp => vec![UiAction::PickerStep {
                up: true,
                len: self.languages().len(),
            }],
            Command::PickerDown => vec![UiAction::PickerStep {
                up: false,
                len: self.languages().len(),
            }],
            Command::PickerSelect => match self.languages().get(state.picker_index) {
                Some((code, _)) => self.select_language(code.clone()),
                None => Vec::new(),
            },
            Command::SelectLanguage(code) => self.select_language(code),
        }
    }

    fn open(&self, screen: Screen) -> Vec<UiAction> {
        let title = match screen.title_key() {
            Some(key) => self.translate_stored(key),
            None => crate::app::APP_TITLE.to_string(),
        };
        let mut actions = vec![UiAction::NavigateTo { screen, title }, UiAction::ClearStatus];

        if screen == Screen::Settings {
            let language = self.language();
            let index = self
                .languages()
                .iter()
                .position(|(code, _)| *code == language)
                .unwrap_or(0);
            actions.push(UiAction::PickerMoveTo(index));
        }
        actions
    }

    /// Dispatch the language change and retitle the settings route
    fn select_language(&self, language: LanguageCode) -> Vec<UiAction> {
        let core = &self.core;
        core.change_language(language.clone());
        self.runtime.block_on(core.settle());

        let localization = core.localization();
        let title = localization.translate("settings.title", Some(&language));
        let name = localization
            .language_name(&language)
            .unwrap_or_else(|| language.to_string());

        let mut actions = vec![UiAction::SetTitle(title), UiAction::SetStatus(name)];
        if let Some(index) = self.languages().iter().position(|(code, _)| *code == language) {
            actions.push(UiAction::PickerMoveTo(index));
        }
        actions
    }

    /// Stop the core and flush state
    pub fn shutdown(self) {
        let Self { core, runtime } = self;
        runtime.block_on(core.shutdown());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reduce;

    fn config() -> Config {
        let mut config = Config::default();
        config.i18n.detect_device_locale = false;
        config
    }

    #[test]
    fn test_open_settings_translates_with_store_language() {
        let services = ServiceHandle::new(&config()).unwrap();
        let actions = services.execute(&UiState::new(), Command::Open(Screen::Settings));

        assert_eq!(
            actions[0],
            UiAction::NavigateTo {
                screen: Screen::Settings,
                title: "Settings".to_string()
            }
        );
        // Languages are sorted: de, en, es, fr
        assert!(actions.contains(&UiAction::PickerMoveTo(1)));
        services.shutdown();
    }

    #[test]
    fn test_picking_a_language_updates_core_and_title() {
        let services = ServiceHandle::new(&config()).unwrap();
        let mut state = UiState::new();
        for action in services.execute(&state, Command::Open(Screen::Settings)) {
            state = reduce(state, action);
        }

        for action in services.execute(&state, Command::PickerUp) {
            state = reduce(state, action);
        }
        for action in services.execute(&state, Command::PickerSelect) {
            state = reduce(state, action);
        }

        assert_eq!(services.language().as_str(), "de");
        assert_eq!(services.localization().current_locale().as_str(), "de");
        assert_eq!(state.current().title, "Einstellungen");
        assert_eq!(state.status.as_deref(), Some("Deutsch"));
        services.shutdown();
    }
}
