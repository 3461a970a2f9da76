//! Scoped registration for the global Escape listener.
//!
//! The pullout's Escape handling must exist only while the panel is open;
//! a handler left armed after close would fire against a closed panel.
//! `arm_escape` hands out an RAII guard: the listener is registered for
//! exactly the guard's lifetime and disarmed on drop, including drops
//! caused by tearing the owning consumer down while the panel is open.
//!
//! Handlers are data, not callbacks: dispatch returns the armed
//! [`EscapeAction`] and the update function performs it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What an armed Escape listener does when the key fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeAction {
    ClosePullout,
}

struct RouterInner {
    next_id: u64,
    armed: Vec<(u64, EscapeAction)>,
    released: u64,
}

/// Registry of armed key listeners. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct KeyRouter {
    inner: Rc<RefCell<RouterInner>>,
}

impl KeyRouter {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RouterInner {
                next_id: 0,
                armed: Vec::new(),
                released: 0,
            })),
        }
    }

    /// Arm the Escape listener. It stays armed for the guard's lifetime.
    pub fn arm_escape(&self, action: EscapeAction) -> EscapeGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.armed.push((id, action));
        EscapeGuard {
            router: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// The action Escape should perform, if any listener is armed.
    /// The most recently armed listener wins.
    pub fn escape_action(&self) -> Option<EscapeAction> {
        self.inner.borrow().armed.last().map(|(_, action)| *action)
    }

    pub fn armed_count(&self) -> usize {
        self.inner.borrow().armed.len()
    }

    /// Total disarms since creation.
    pub fn released_count(&self) -> u64 {
        self.inner.borrow().released
    }
}

impl Default for KeyRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for one armed Escape listener.
pub struct EscapeGuard {
    router: Weak<RefCell<RouterInner>>,
    id: u64,
}

impl Drop for EscapeGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.router.upgrade() {
            let mut inner = inner.borrow_mut();
            let before = inner.armed.len();
            inner.armed.retain(|(id, _)| *id != self.id);
            if inner.armed.len() != before {
                inner.released += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_escape_is_noop() {
        let router = KeyRouter::new();
        assert_eq!(router.escape_action(), None);
        assert_eq!(router.armed_count(), 0);
    }

    #[test]
    fn test_guard_arms_and_disarms() {
        let router = KeyRouter::new();
        let guard = router.arm_escape(EscapeAction::ClosePullout);
        assert_eq!(router.escape_action(), Some(EscapeAction::ClosePullout));
        assert_eq!(router.armed_count(), 1);

        drop(guard);
        assert_eq!(router.escape_action(), None);
        assert_eq!(router.released_count(), 1);
    }

    #[test]
    fn test_drop_releases_exactly_once() {
        let router = KeyRouter::new();
        let g1 = router.arm_escape(EscapeAction::ClosePullout);
        let g2 = router.arm_escape(EscapeAction::ClosePullout);
        drop(g1);
        drop(g2);
        assert_eq!(router.released_count(), 2);
        assert_eq!(router.armed_count(), 0);
    }

    #[test]
    fn test_guard_outliving_router_is_harmless() {
        let router = KeyRouter::new();
        let guard = router.arm_escape(EscapeAction::ClosePullout);
        drop(router);
        drop(guard);
    }
}
