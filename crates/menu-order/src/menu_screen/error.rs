//! Error types for the menu screen.

use thiserror::Error;

/// Errors that can occur around the menu screen.
///
/// Fetch failures never appear here; the screen swallows them into an empty
/// section list by design, so the only way to fail is losing the screen itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuScreenError {
    /// The screen's task is gone or dropped the response channel.
    #[error("Screen communication error: {0}")]
    ScreenGone(String),
}

impl From<String> for MenuScreenError {
    fn from(msg: String) -> Self {
        MenuScreenError::ScreenGone(msg)
    }
}
