//! Shared UI state with per-field change notification.
//!
//! `UiStore` holds the four process-wide UI fields (theme, sidebar, code
//! pullout, current snippet) and notifies only the observers of a written
//! field. The store is constructed once at startup and handed to consumers
//! by handle; nothing reaches it ambiently.
//!
//! Subscriptions are per-field: a sidebar toggle never re-evaluates a code
//! observer, which is what keeps the highlighter from re-tokenizing on
//! unrelated writes. Callbacks are held weakly by the store and strongly by
//! the [`Subscription`] guard, so dropping the guard deregisters the
//! observer before the next notification; dead entries are cleaned up
//! lazily during notification.
//!
//! Writes are unconditional (same-value writes still notify) and last write
//! wins. The store validates nothing and performs no I/O.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::theme::Theme;

/// Keys for the subscription bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Theme,
    SidebarOpen,
    CodebarOpen,
    Code,
}

impl Field {
    pub const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Field::Theme => 0,
            Field::SidebarOpen => 1,
            Field::CodebarOpen => 2,
            Field::Code => 3,
        }
    }
}

/// The shared UI state record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub codebar_open: bool,
    /// Snippet text for the pullout. Empty means nothing to show; closing
    /// the pullout leaves it in place for potential reopening.
    pub code: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sidebar_open: true,
            codebar_open: false,
            code: String::new(),
        }
    }
}

type Callback = RefCell<dyn FnMut(&UiState)>;

struct Inner {
    state: UiState,
    subscribers: [Vec<Weak<Callback>>; Field::COUNT],
    field_versions: [u64; Field::COUNT],
    version: u64,
}

/// Handle to the process-wide UI state. Cheap to clone; all clones share
/// the same state. Single-threaded by design — the logic loop is the only
/// writer, so there is no internal synchronization.
#[derive(Clone)]
pub struct UiStore {
    inner: Rc<RefCell<Inner>>,
}

/// RAII guard for a registered observer. Dropping it deregisters the
/// callback; no notification for its field runs after the drop.
pub struct Subscription {
    _cb: Rc<Callback>,
}

impl UiStore {
    pub fn new(initial: UiState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: initial,
                subscribers: [const { Vec::new() }; Field::COUNT],
                field_versions: [0; Field::COUNT],
                version: 0,
            })),
        }
    }

    /// Snapshot of the current state. The clone is the caller's; mutating
    /// it does not touch the store.
    pub fn get(&self) -> UiState {
        self.inner.borrow().state.clone()
    }

    /// Borrowed read without cloning `code`.
    pub fn with<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    /// Monotonic counter bumped on every write.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Monotonic counter bumped on writes to one field.
    pub fn field_version(&self, field: Field) -> u64 {
        self.inner.borrow().field_versions[field.index()]
    }

    /// Register an observer for one field. Observers run synchronously, in
    /// registration order, after the write has been applied; they may
    /// re-enter the store.
    pub fn subscribe(
        &self,
        field: Field,
        callback: impl FnMut(&UiState) + 'static,
    ) -> Subscription {
        let cb: Rc<Callback> = Rc::new(RefCell::new(callback));
        self.inner.borrow_mut().subscribers[field.index()]
            .push(Rc::downgrade(&cb));
        Subscription { _cb: cb }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.write(&[Field::Theme], |s| s.theme = theme);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.write(&[Field::SidebarOpen], |s| s.sidebar_open = open);
    }

    pub fn set_codebar_open(&self, open: bool) {
        self.write(&[Field::CodebarOpen], |s| s.codebar_open = open);
    }

    pub fn set_code(&self, code: impl Into<String>) {
        let code = code.into();
        self.write(&[Field::Code], move |s| s.code = code);
    }

    /// The producer operation for snippet sources: write the snippet and
    /// open the pullout as one logical update. Both fields are applied
    /// before anyone is notified (code observers first), so no observer can
    /// see the panel open against a stale snippet.
    pub fn open_with_code(&self, code: impl Into<String>) {
        let code = code.into();
        self.write(&[Field::Code, Field::CodebarOpen], move |s| {
            s.code = code;
            s.codebar_open = true;
        });
    }

    fn write(&self, fields: &[Field], mutate: impl FnOnce(&mut UiState)) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner.state);
            inner.version += 1;
            for field in fields {
                inner.field_versions[field.index()] += 1;
            }
            inner.state.clone()
        };
        for field in fields {
            self.notify(*field, &snapshot);
        }
    }

    fn notify(&self, field: Field, snapshot: &UiState) {
        // Upgrade outside the store borrow so callbacks may re-enter.
        let callbacks: Vec<Rc<Callback>> = {
            let mut inner = self.inner.borrow_mut();
            let subs = &mut inner.subscribers[field.index()];
            subs.retain(|weak| weak.strong_count() > 0);
            subs.iter().filter_map(Weak::upgrade).collect()
        };
        for cb in callbacks {
            (cb.borrow_mut())(snapshot);
        }
    }
}
