//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model
//! (all store writes flow through here), and returns a list of commands
//! to execute.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::flog_debug;
use crate::keys::EscapeAction;
use crate::pages::DemoCard;
use crate::ui;

use super::command::Command;
use super::message::Message;
use super::model::{CopiedIndicator, Model, COPIED_TTL};

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return cmds;
            }
            update_key(model, key, &mut cmds);
        }

        Message::Mouse(mouse) => update_mouse(model, mouse),

        Message::Resize(w, h) => {
            model.size = (w, h);
            model.dirty = true; // Resize triggers re-render
        }

        Message::Copied { card } => {
            model.copied = Some(CopiedIndicator {
                card,
                until: Instant::now() + COPIED_TTL,
            });
            model.dirty = true;
        }

        Message::CopiedExpired => {
            model.copied = None;
            model.dirty = true;
        }
    }

    cmds
}

fn update_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    // Quit works in both panel states
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        cmds.push(Command::Quit);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            cmds.push(Command::Quit);
            return;
        }
        KeyCode::Esc => {
            // Escape only does something while a listener is armed, i.e.
            // while the pullout is open.
            if let Some(action) = model.router.escape_action() {
                match action {
                    EscapeAction::ClosePullout => {
                        flog_debug!("escape: closing pullout");
                        model.store.set_codebar_open(false);
                        model.dirty = true;
                    }
                }
            }
            return;
        }
        _ => {}
    }

    if model.store.with(|s| s.codebar_open) {
        // The overlay owns the keyboard while open.
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                model.pullout_scroll = model.pullout_scroll.saturating_sub(1);
                model.dirty = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                model.pullout_scroll = model.pullout_scroll.saturating_add(1);
                model.dirty = true;
            }
            KeyCode::Char('x') => {
                model.store.set_codebar_open(false);
                model.dirty = true;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('t') => {
            let next = model.store.with(|s| s.theme).toggled();
            model.store.set_theme(next);
            model.dirty = true;
        }
        KeyCode::Char('b') => {
            let open = model.store.with(|s| s.sidebar_open);
            model.store.set_sidebar_open(!open);
            model.dirty = true;
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => model.navigate(model.route.next()),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => model.navigate(model.route.prev()),
        KeyCode::Down | KeyCode::Char('j') => select(model, 1),
        KeyCode::Up | KeyCode::Char('k') => select(model, -1),
        KeyCode::Enter | KeyCode::Char('s') => view_source(model),
        KeyCode::Char('y') => {
            if let Some(card) = current_card(model) {
                cmds.push(Command::CopyToClipboard {
                    card: model.selected_card,
                    text: card.snippet.to_string(),
                });
            }
        }
        _ => {}
    }
}

fn current_card(model: &Model) -> Option<&'static DemoCard> {
    model.route.cards().get(model.selected_card)
}

/// The selected card publishes its snippet: one combined write, so the
/// panel never opens against a stale snippet.
fn view_source(model: &mut Model) {
    if let Some(card) = current_card(model) {
        model.store.open_with_code(card.snippet);
        model.pullout_scroll = 0;
        model.dirty = true;
    }
}

fn select(model: &mut Model, delta: isize) {
    let count = model.route.cards().len();
    if count == 0 {
        return;
    }
    let next = model
        .selected_card
        .saturating_add_signed(delta)
        .min(count - 1);
    if next != model.selected_card {
        model.selected_card = next;
        let area = Rect::new(0, 0, model.size.0, model.size.1);
        let main = ui::regions(area, model.store.with(|s| s.sidebar_open)).main;
        model.card_scroll = ui::scroll_for_selection(main, model.route, next, model.card_scroll);
        model.dirty = true;
    }
}

fn update_mouse(model: &mut Model, mouse: MouseEvent) {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };
    let pos = Position::new(mouse.column, mouse.row);
    let area = Rect::new(0, 0, model.size.0, model.size.1);

    if model.store.with(|s| s.codebar_open) {
        // The backdrop is interactive only while the panel is open. Clicks
        // inside the tray stay there; the close control and everything
        // outside the tray close the panel.
        let tray = ui::tray_rect(area);
        if ui::close_control_rect(tray).contains(pos) || !tray.contains(pos) {
            model.store.set_codebar_open(false);
            model.dirty = true;
        }
        return;
    }

    // While closed the same click lands on the page beneath.
    let sidebar_open = model.store.with(|s| s.sidebar_open);
    let regions = ui::regions(area, sidebar_open);
    if sidebar_open && regions.sidebar.contains(pos) {
        if let Some(route) = ui::nav_item_at(regions.sidebar, pos) {
            model.navigate(route);
        }
        return;
    }
    if regions.main.contains(pos) {
        if let Some(card) = ui::card_at(regions.main, model.route, model.card_scroll, pos) {
            if card != model.selected_card {
                model.selected_card = card;
                model.dirty = true;
            }
        }
    }
}
