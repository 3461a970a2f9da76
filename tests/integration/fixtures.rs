//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Building a wired model at a fixed terminal size
//! - Dispatching synthetic key presses and mouse clicks
//! - Reading the text back out of rendered snippet lines

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::text::Line;

use finery::pages::Route;
use finery::store::UiState;
use finery::tea::{update, Command, Message, Model};

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 40;

pub fn model() -> Model {
    model_at(Route::Home)
}

pub fn model_at(route: Route) -> Model {
    Model::new(UiState::default(), route, (WIDTH, HEIGHT))
}

pub fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(model, Message::Key(KeyEvent::from(code)))
}

pub fn click(model: &mut Model, column: u16, row: u16) -> Vec<Command> {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    update(model, Message::Mouse(mouse))
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

pub fn lines_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}
