//! Immutable render snapshots.
//!
//! The logic thread publishes a versioned [`RenderState`] whenever the
//! model changes; the render thread draws the latest snapshot it has and
//! never touches application state. Snapshots carry the applied theme
//! marker (not the raw store field) and the already-highlighted snippet
//! lines, so the render thread does no store reads and no tokenizing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use ratatui::text::Line;

use crate::pages::Route;
use crate::tea::Model;
use crate::theme::Theme;

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub route: Route,
    pub selected_card: usize,
    pub card_scroll: usize,
    pub copied_card: Option<usize>,
    pub pullout_open: bool,
    pub pullout_scroll: u16,
    /// Highlighted snippet lines; empty while the pullout is closed.
    pub code_lines: Vec<Line<'static>>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            theme: Theme::Dark,
            sidebar_open: true,
            route: Route::Home,
            selected_card: 0,
            card_scroll: 0,
            copied_card: None,
            pullout_open: false,
            pullout_scroll: 0,
            code_lines: Vec::new(),
        }
    }
}

impl RenderState {
    pub fn snapshot(model: &Model) -> Self {
        let (sidebar_open, pullout_open) =
            model.store.with(|s| (s.sidebar_open, s.codebar_open));
        // The highlight cache is read only while the panel is open, so a
        // closed panel never pays for tokenizing.
        let code_lines = if pullout_open {
            model.highlight.lines()
        } else {
            Vec::new()
        };
        Self {
            version: next_version(),
            theme: model.theme.active(),
            sidebar_open,
            route: model.route,
            selected_card: model.selected_card,
            card_scroll: model.card_scroll,
            copied_card: model.copied_card(Instant::now()),
            pullout_open,
            pullout_scroll: model.pullout_scroll,
            code_lines,
        }
    }
}
