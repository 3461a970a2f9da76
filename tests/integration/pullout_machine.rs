//! The code pullout: all three close paths, the scoped Escape listener,
//! and backdrop click-through while closed.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use finery::pages::Route;
use finery::render::RenderState;
use finery::ui;

use crate::fixtures::{self, click, lines_text, press, HEIGHT, WIDTH};

#[test]
fn test_view_source_opens_the_panel_with_the_cards_snippet() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);

    assert!(model.store.get().codebar_open);
    let snapshot = RenderState::snapshot(&model);
    let expected = Route::Buttons.cards()[0].snippet;
    assert_eq!(lines_text(&snapshot.code_lines), expected);
}

#[test]
fn test_escape_while_closed_is_a_noop() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Esc);

    assert!(!model.store.get().codebar_open);
    assert_eq!(model.router.released_count(), 0);
}

#[test]
fn test_escape_closes_and_deregisters_exactly_once() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);
    assert!(model.pullout.escape_armed());

    press(&mut model, KeyCode::Esc);
    assert!(!model.store.get().codebar_open);
    assert!(!model.pullout.escape_armed());
    assert_eq!(model.router.released_count(), 1);

    // The listener is gone; a second Escape changes nothing.
    press(&mut model, KeyCode::Esc);
    assert!(!model.store.get().codebar_open);
    assert_eq!(model.router.released_count(), 1);
}

#[test]
fn test_escape_listener_rearms_on_each_open() {
    let mut model = fixtures::model_at(Route::Buttons);
    for round in 1..=3u64 {
        press(&mut model, KeyCode::Enter);
        assert!(model.pullout.escape_armed());
        press(&mut model, KeyCode::Esc);
        assert_eq!(model.router.released_count(), round);
    }
}

#[test]
fn test_explicit_close_control() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);
    press(&mut model, KeyCode::Char('x'));

    assert!(!model.store.get().codebar_open);
    assert_eq!(model.store.get().code, Route::Buttons.cards()[0].snippet);
}

#[test]
fn test_backdrop_click_closes_while_open() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);

    // (30, 10) is left of the tray, i.e. on the dimmed backdrop.
    click(&mut model, 30, 10);
    assert!(!model.store.get().codebar_open);
    assert_eq!(model.store.get().code, Route::Buttons.cards()[0].snippet);
}

#[test]
fn test_click_inside_tray_does_not_close() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);

    let tray = ui::tray_rect(ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT));
    click(&mut model, tray.x + tray.width / 2, tray.y + 10);
    assert!(model.store.get().codebar_open);
}

#[test]
fn test_close_control_click_closes() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);

    let tray = ui::tray_rect(ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT));
    let close = ui::close_control_rect(tray);
    click(&mut model, close.x, close.y);
    assert!(!model.store.get().codebar_open);
}

#[test]
fn test_backdrop_clicks_through_while_closed() {
    let mut model = fixtures::model_at(Route::Buttons);
    assert_eq!(model.selected_card, 0);

    // Same coordinates as the backdrop-close test, but the panel is
    // closed: the click must land on the page beneath instead.
    click(&mut model, 30, 10);
    assert!(!model.store.get().codebar_open, "close handler must not fire");
    assert_eq!(model.selected_card, 1, "the underlying card takes the click");
}

#[test]
fn test_overlay_owns_navigation_keys_while_open() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Enter);

    press(&mut model, KeyCode::Tab);
    assert_eq!(model.route, Route::Buttons);

    press(&mut model, KeyCode::Char('t'));
    assert_eq!(
        model.store.get().theme,
        finery::theme::Theme::Dark,
        "theme toggle is a page key, swallowed while the overlay is open"
    );
}

#[test]
fn test_scroll_resets_on_each_publish() {
    let mut model = fixtures::model_at(Route::GridBasics);
    press(&mut model, KeyCode::Enter);
    press(&mut model, KeyCode::Char('j'));
    press(&mut model, KeyCode::Char('j'));
    assert_eq!(model.pullout_scroll, 2);

    press(&mut model, KeyCode::Char('x'));
    press(&mut model, KeyCode::Enter);
    assert_eq!(model.pullout_scroll, 0);
}
