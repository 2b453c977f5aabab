//! Terminal events and keybindings
//!
//! Polls crossterm for input and maps keys to `Command`s. Which keys mean
//! what depends on the current screen and overlay, never on the core.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::{Command, Screen};
use super::state::UiState;

/// Events the main loop reacts to
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),

    /// Terminal resize, triggers a redraw
    Resize(u16, u16),

    /// Nothing happened within the tick rate
    Tick,
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to the tick rate
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TuiEvent::Tick);
        }
        match event::read()? {
            // Windows reports releases too
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(TuiEvent::Key(key)),
            CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
            _ => Ok(TuiEvent::Tick),
        }
    }
}

/// Map a key press to a command
///
/// Global keys first, then the current screen's keys.
pub fn keymap(state: &UiState, key: KeyEvent) -> Option<Command> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(Command::Quit),
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Some(Command::Quit),
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => return Some(Command::ToggleHelp),
        (KeyCode::Esc, _) if state.help_visible => return Some(Command::ToggleHelp),
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) if state.can_go_back() => {
            return Some(Command::Back)
        }
        _ => {}
    }

    if state.help_visible {
        return None;
    }

    match state.current_screen() {
        Screen::Home => match key.code {
            KeyCode::Char('s') => Some(Command::Open(Screen::Settings)),
            KeyCode::Char('a') => Some(Command::Open(Screen::About)),
            _ => None,
        },
        Screen::Settings => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::PickerUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::PickerDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PickerSelect),
            _ => None,
        },
        Screen::About => None,
    }
}
