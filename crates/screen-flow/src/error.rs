//! # Flow Errors
//!
//! This module defines the common error types used throughout the screen
//! framework. Centralizing them keeps error handling consistent across all
//! screens and clients.

/// Errors that can occur within the screen framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Screen closed")]
    ScreenClosed,
    #[error("Screen dropped response channel")]
    ScreenDropped,
    #[error("Screen error: {0}")]
    ScreenError(Box<dyn std::error::Error + Send + Sync>),
}
