//! Error types for the item-detail screen.

use crate::model::OrderError;
use thiserror::Error;

/// Errors that can occur during item configuration.
#[derive(Debug, Error)]
pub enum ItemScreenError {
    /// Composing the order line failed (zero-priced configuration).
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The screen's task is gone or dropped the response channel.
    #[error("Screen communication error: {0}")]
    ScreenGone(String),
}

impl From<String> for ItemScreenError {
    fn from(msg: String) -> Self {
        ItemScreenError::ScreenGone(msg)
    }
}
