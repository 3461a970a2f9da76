//! Theme exclusivity and sidebar toggling through the update loop.

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use finery::render::RenderState;
use finery::theme::Theme;

use crate::fixtures::{self, press};

#[test]
fn test_exactly_one_theme_marker_after_every_toggle() {
    let mut model = fixtures::model();

    for _ in 0..6 {
        press(&mut model, KeyCode::Char('t'));
        let markers = model.theme.markers();
        assert_ne!(markers.light, markers.dark, "never both, never neither");
        assert_eq!(model.theme.active(), model.store.get().theme);
    }
}

#[test]
fn test_theme_toggle_flips_between_two_values_only() {
    let mut model = fixtures::model();
    assert_eq!(model.store.get().theme, Theme::Dark);

    press(&mut model, KeyCode::Char('t'));
    assert_eq!(model.store.get().theme, Theme::Light);

    press(&mut model, KeyCode::Char('t'));
    assert_eq!(model.store.get().theme, Theme::Dark);
}

#[test]
fn test_snapshot_palette_follows_applied_marker() {
    let mut model = fixtures::model();
    press(&mut model, KeyCode::Char('t'));
    let snapshot = RenderState::snapshot(&model);
    assert_eq!(snapshot.theme, Theme::Light);
}

#[test]
fn test_double_sidebar_toggle_restores_original() {
    let mut model = fixtures::model();
    let original = model.store.get().sidebar_open;

    press(&mut model, KeyCode::Char('b'));
    assert_eq!(model.store.get().sidebar_open, !original);

    press(&mut model, KeyCode::Char('b'));
    assert_eq!(model.store.get().sidebar_open, original);
}

#[test]
fn test_sidebar_and_theme_writes_never_retokenize() {
    let mut model = fixtures::model();
    model.store.open_with_code("const x = 1");
    let _ = model.highlight.lines();
    let generation = model.highlight.generation();

    press(&mut model, KeyCode::Esc);
    press(&mut model, KeyCode::Char('b'));
    press(&mut model, KeyCode::Char('t'));
    press(&mut model, KeyCode::Char('b'));

    let _ = model.highlight.lines();
    assert_eq!(model.highlight.generation(), generation);
}
