//! UI rendering
//!
//! Pure rendering functions: UI state plus a `View` of the core in, a
//! drawn frame out.

pub mod screens;

pub use screens::View;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{Screen, UiState};

pub fn render(frame: &mut Frame, state: &UiState, view: &View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(3),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0], state);
    match state.current_screen() {
        Screen::Home => render_home(frame, chunks[1], state, view),
        Screen::Settings => render_settings(frame, chunks[1], state, view),
        Screen::About => render_about(frame, chunks[1], view),
    }
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, frame.area(), state);
    }
}

fn accent(state: &UiState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let back = if state.can_go_back() { "< " } else { "" };
    let title = Paragraph::new(Line::from(vec![
        Span::raw(back),
        Span::styled(
            state.current().title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &UiState, view: &View<'_>) {
    let content = screens::home(view);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            content.welcome,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(content.instruction),
        Line::from(""),
    ];
    for button in content.buttons {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", button.hotkey), accent(state, Color::Cyan)),
            Span::raw(button.label),
        ]));
    }

    let home = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(home, area);
}

fn render_settings(frame: &mut Frame, area: Rect, state: &UiState, view: &View<'_>) {
    let content = screens::settings(view);

    let items: Vec<ListItem> = content
        .options
        .iter()
        .enumerate()
        .map(|(row, name)| {
            let marker = if Some(row) == content.selected { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, name))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", content.heading))
                .borders(Borders::ALL),
        )
        .highlight_style(accent(state, Color::Yellow).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.picker_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_about(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let content = screens::about(view);

    let about = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            content.info,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(content.explanation),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(about, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let hints = match state.current_screen() {
        Screen::Home => "s: Settings | a: About | F1: Help | q: Quit",
        Screen::Settings => "Up/Down: Move | Enter: Pick | Esc: Back | q: Quit",
        Screen::About => "Esc: Back | F1: Help | q: Quit",
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status {
        spans.push(Span::styled(message.as_str(), accent(state, Color::Green)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, accent(state, Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &UiState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q, Ctrl+C   - Quit"),
        Line::from("  F1, ?       - Toggle help"),
        Line::from("  Esc         - Back"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  s           - Settings"),
        Line::from("  a           - About"),
        Line::from(""),
        Line::from("Settings:"),
        Line::from("  Up/Down     - Move"),
        Line::from("  Enter       - Switch language"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(accent(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
