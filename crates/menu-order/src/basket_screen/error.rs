//! Error types for the basket screen.

use thiserror::Error;

/// Errors that can occur around the basket screen.
///
/// Quantity underflow is clamped, not an error, so the only failure mode is
/// losing the screen itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    /// The screen's task is gone or dropped the response channel.
    #[error("Screen communication error: {0}")]
    ScreenGone(String),
}

impl From<String> for BasketError {
    fn from(msg: String) -> Self {
        BasketError::ScreenGone(msg)
    }
}
