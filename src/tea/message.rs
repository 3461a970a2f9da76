//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - keyboard and mouse events,
//! terminal resizes, and command completion callbacks.

use crossterm::event::{KeyEvent, MouseEvent};

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Command completion callbacks
    /// A snippet landed on the clipboard; show the check on its card.
    Copied { card: usize },
    /// The transient copied indicator timed out.
    CopiedExpired,
}
