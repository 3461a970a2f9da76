//! Route cycling, card selection, and the clipboard command path.

use std::time::Instant;

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use finery::pages::Route;
use finery::tea::{update, Command, Message};
use finery::ui;

use crate::fixtures::{self, click, press, HEIGHT, WIDTH};

#[test]
fn test_tab_cycles_routes_both_ways() {
    let mut model = fixtures::model();
    press(&mut model, KeyCode::Tab);
    assert_eq!(model.route, Route::Buttons);

    press(&mut model, KeyCode::BackTab);
    press(&mut model, KeyCode::BackTab);
    assert_eq!(model.route, Route::GridRowChildren, "navigation wraps");
}

#[test]
fn test_navigation_resets_card_selection() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Char('j'));
    press(&mut model, KeyCode::Char('j'));
    assert_eq!(model.selected_card, 2);

    press(&mut model, KeyCode::Tab);
    assert_eq!(model.selected_card, 0);
    assert_eq!(model.card_scroll, 0);
}

#[test]
fn test_card_selection_clamps_at_both_ends() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Char('k'));
    assert_eq!(model.selected_card, 0);

    let last = Route::Buttons.cards().len() - 1;
    for _ in 0..50 {
        press(&mut model, KeyCode::Char('j'));
    }
    assert_eq!(model.selected_card, last);
}

#[test]
fn test_selection_keeps_card_in_view() {
    let mut model = fixtures::model_at(Route::Buttons);
    let last = Route::Buttons.cards().len() - 1;
    for _ in 0..last {
        press(&mut model, KeyCode::Char('j'));
    }

    let area = ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT);
    let main = ui::regions(area, model.store.get().sidebar_open).main;
    assert!(ui::card_rects(main, Route::Buttons, model.card_scroll)
        .iter()
        .any(|(i, _)| *i == last));
}

#[test]
fn test_sidebar_click_navigates() {
    let mut model = fixtures::model();
    let area = ratatui::layout::Rect::new(0, 0, WIDTH, HEIGHT);
    let sidebar = ui::regions(area, true).sidebar;
    let (route, rect) = ui::nav_item_rects(sidebar)[3];

    click(&mut model, rect.x + 2, rect.y);
    assert_eq!(model.route, route);
}

#[test]
fn test_copy_emits_clipboard_command_with_snippet() {
    let mut model = fixtures::model_at(Route::Buttons);
    press(&mut model, KeyCode::Char('j'));
    let cmds = press(&mut model, KeyCode::Char('y'));

    assert_eq!(
        cmds,
        vec![Command::CopyToClipboard {
            card: 1,
            text: Route::Buttons.cards()[1].snippet.to_string(),
        }]
    );
}

#[test]
fn test_copied_indicator_lifecycle() {
    let mut model = fixtures::model_at(Route::Buttons);
    update(&mut model, Message::Copied { card: 0 });
    assert_eq!(model.copied_card(Instant::now()), Some(0));

    update(&mut model, Message::CopiedExpired);
    assert_eq!(model.copied_card(Instant::now()), None);
}

#[test]
fn test_quit_command_from_both_panel_states() {
    let mut model = fixtures::model_at(Route::Buttons);
    assert_eq!(press(&mut model, KeyCode::Char('q')), vec![Command::Quit]);

    press(&mut model, KeyCode::Enter);
    assert!(model.store.get().codebar_open);
    assert_eq!(press(&mut model, KeyCode::Char('q')), vec![Command::Quit]);
}

#[test]
fn test_resize_is_recorded_for_hit_testing() {
    let mut model = fixtures::model();
    update(&mut model, Message::Resize(80, 24));
    assert_eq!(model.size, (80, 24));
}
