//! The code pullout consumer.
//!
//! The panel oscillates between closed and open for the life of the
//! application, driven entirely by the store's `codebar_open` field. This
//! consumer's job is the listener lifecycle: opening acquires the Escape
//! guard, closing releases it. The guard is tied to the transition edge,
//! not to construction; the consumer stays alive across both states, and
//! redundant notifications (an open written while already open) arm
//! nothing twice.
//!
//! Dropping the consumer while the panel is open also releases the guard,
//! so tearing the UI down mid-open cannot leak the listener.

use std::cell::RefCell;
use std::rc::Rc;

use crate::keys::{EscapeAction, EscapeGuard, KeyRouter};
use crate::store::{Field, Subscription, UiStore};

pub struct CodePullout {
    inner: Rc<RefCell<PulloutInner>>,
    _sub: Subscription,
}

struct PulloutInner {
    router: KeyRouter,
    guard: Option<EscapeGuard>,
}

impl CodePullout {
    pub fn new(store: &UiStore, router: KeyRouter) -> Self {
        let inner = Rc::new(RefCell::new(PulloutInner {
            router,
            guard: None,
        }));

        // A consumer constructed against an already-open panel arms now.
        sync(&inner, store.with(|s| s.codebar_open));

        let observed = Rc::clone(&inner);
        let sub = store.subscribe(Field::CodebarOpen, move |state| {
            sync(&observed, state.codebar_open);
        });

        Self { inner, _sub: sub }
    }

    /// Whether the Escape listener is currently armed.
    pub fn escape_armed(&self) -> bool {
        self.inner.borrow().guard.is_some()
    }
}

fn sync(inner: &Rc<RefCell<PulloutInner>>, open: bool) {
    let mut inner = inner.borrow_mut();
    if open {
        if inner.guard.is_none() {
            let guard = inner.router.arm_escape(EscapeAction::ClosePullout);
            inner.guard = Some(guard);
        }
    } else {
        inner.guard = None;
    }
}
