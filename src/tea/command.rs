//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime.

/// Output commands from the update function.
/// These represent side effects that need to be executed.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Write a card's snippet to the system clipboard.
    CopyToClipboard { card: usize, text: String },

    // App lifecycle
    Quit,
}
