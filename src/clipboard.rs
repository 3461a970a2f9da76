//! System clipboard access for the "copy source" control.
//!
//! Failure is operator-facing only: callers log it and leave the UI state
//! untouched, so a failed copy simply never shows the copied check.

use arboard::Clipboard;

use crate::{Error, Result};

pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| Error::Clipboard(e.to_string()))
}
