//! The shared store's contract, exercised through the real consumer wiring.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use finery::render::RenderState;
use finery::store::{Field, UiState, UiStore};
use finery::theme::Theme;

use crate::fixtures::{self, lines_text};

#[test]
fn test_store_starts_with_documented_defaults() {
    let store = UiStore::new(UiState::default());
    let state = store.get();
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.sidebar_open);
    assert!(!state.codebar_open);
    assert_eq!(state.code, "");
}

#[test]
fn test_unrelated_writes_do_not_reach_other_consumers() {
    let store = UiStore::new(UiState::default());

    let theme_hits = Rc::new(Cell::new(0));
    let code_hits = Rc::new(Cell::new(0));
    let theme_counter = Rc::clone(&theme_hits);
    let code_counter = Rc::clone(&code_hits);
    let _theme_sub = store.subscribe(Field::Theme, move |_| {
        theme_counter.set(theme_counter.get() + 1)
    });
    let _code_sub = store.subscribe(Field::Code, move |_| {
        code_counter.set(code_counter.get() + 1)
    });

    store.set_sidebar_open(false);
    store.set_codebar_open(true);
    store.set_sidebar_open(true);

    assert_eq!(theme_hits.get(), 0);
    assert_eq!(code_hits.get(), 0);
}

#[test]
fn test_publish_reaches_highlighter_with_exact_text() {
    let model = fixtures::model();
    model.store.open_with_code("const x = 1");

    let snapshot = RenderState::snapshot(&model);
    assert!(snapshot.pullout_open);
    assert_eq!(lines_text(&snapshot.code_lines), "const x = 1");
}

#[test]
fn test_two_publishes_before_render_leave_last_write() {
    let model = fixtures::model();
    model.store.open_with_code("a");
    model.store.open_with_code("b");

    let state = model.store.get();
    assert_eq!(state.code, "b");
    assert!(state.codebar_open);

    let snapshot = RenderState::snapshot(&model);
    assert_eq!(lines_text(&snapshot.code_lines), "b");
}

#[test]
fn test_closing_does_not_clear_the_snippet() {
    let model = fixtures::model();
    model.store.open_with_code("const x = 1");
    model.store.set_codebar_open(false);
    assert_eq!(model.store.get().code, "const x = 1");
}
