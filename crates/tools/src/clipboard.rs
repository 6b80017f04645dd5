//! Clipboard collaborator
//!
//! Fire-and-forget from the caller's perspective: failures are reported
//! through the notifier and the log, never propagated.

use thiserror::Error;
use tracing::warn;

/// Clipboard failure cases
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {msg}")]
    Unavailable { msg: String },

    #[error("Clipboard write failed: {msg}")]
    WriteFailed { msg: String },
}

/// Write a string to the system clipboard.
pub fn copy_text(content: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
        msg: e.to_string(),
    })?;

    clipboard
        .set_text(content.to_owned())
        .map_err(|e| ClipboardError::WriteFailed { msg: e.to_string() })
}

/// Copy and signal the outcome through a boolean "succeeded" notifier.
/// Failures are logged here and go no further.
pub fn copy_and_notify(content: &str, notify: &mut dyn FnMut(bool)) {
    match copy_text(content) {
        Ok(()) => notify(true),
        Err(e) => {
            warn!("clipboard copy failed: {e}");
            notify(false);
        }
    }
}
