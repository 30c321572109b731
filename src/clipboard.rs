//! System clipboard access.
//!
//! A thin wrapper around the `arboard` crate, scoped to plain text. The
//! instance is cheap to create; create one per operation and drop it.
//!
//! # Platform Notes
//!
//! - **Windows**: Win32 clipboard API
//! - **macOS**: NSPasteboard
//! - **Linux**: X11 selections or Wayland data-control protocol

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Error)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(String);

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self(err.to_string())
    }
}

/// Cross-platform plain-text clipboard access.
///
/// Clipboard operations should run on the UI thread; some platforms reject
/// access from elsewhere.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Open the system clipboard.
    ///
    /// # Errors
    ///
    /// Fails when the clipboard is unavailable or locked by another process.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }

    /// Current text content of the clipboard.
    ///
    /// # Errors
    ///
    /// Fails when the clipboard is empty or holds non-text data.
    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(Into::into)
    }

    /// Replace the clipboard content with `text`.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_owned()).map_err(Into::into)
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}
