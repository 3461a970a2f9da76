//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model owns the UI store and its consumers plus the page-local state
//! (route, card selection, transient copied indicator). The store holds the
//! four shared fields; everything route-scoped lives here, the way the web
//! tour kept route state in the framework router rather than the store.

use std::time::{Duration, Instant};

use crate::highlight::HighlightCache;
use crate::keys::KeyRouter;
use crate::pages::Route;
use crate::pullout::CodePullout;
use crate::store::{UiState, UiStore};
use crate::theme::ThemeApplier;

/// How long the copied check stays on a card.
pub const COPIED_TTL: Duration = Duration::from_millis(1000);

/// The transient "copied to clipboard" check on one card.
#[derive(Debug, Clone, Copy)]
pub struct CopiedIndicator {
    pub card: usize,
    pub until: Instant,
}

/// Application state: the shared store, its consumers, and page-local state.
pub struct Model {
    // Shared UI state and its consumers
    pub store: UiStore,
    pub router: KeyRouter,
    pub theme: ThemeApplier,
    pub highlight: HighlightCache,
    pub pullout: CodePullout,

    // Page-local state
    pub route: Route,
    pub selected_card: usize,
    pub card_scroll: usize,
    pub pullout_scroll: u16,
    pub copied: Option<CopiedIndicator>,

    // Last known terminal size, for hit-testing
    pub size: (u16, u16),

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,
}

impl Model {
    /// Wire the store and all consumers. Consumers subscribe on
    /// construction; the theme applier marks the root immediately.
    pub fn new(initial: UiState, route: Route, size: (u16, u16)) -> Self {
        let store = UiStore::new(initial);
        let router = KeyRouter::new();
        let theme = ThemeApplier::new(&store);
        let highlight = HighlightCache::new(&store);
        let pullout = CodePullout::new(&store, router.clone());

        Self {
            store,
            router,
            theme,
            highlight,
            pullout,
            route,
            selected_card: 0,
            card_scroll: 0,
            pullout_scroll: 0,
            copied: None,
            size,
            dirty: true,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            self.route = route;
            self.selected_card = 0;
            self.card_scroll = 0;
            self.dirty = true;
        }
    }

    /// The card currently showing the copied check, if it hasn't expired.
    pub fn copied_card(&self, now: Instant) -> Option<usize> {
        self.copied
            .filter(|indicator| indicator.until > now)
            .map(|indicator| indicator.card)
    }

    /// Whether the copied indicator exists but has passed its deadline.
    pub fn copied_expired(&self, now: Instant) -> bool {
        self.copied.is_some_and(|indicator| indicator.until <= now)
    }
}
