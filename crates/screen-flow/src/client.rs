//! # Generic Client
//!
//! This module defines the generic client for communicating with screen actors.

use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::screen::Screen;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for interacting with a `ScreenActor`.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive. Dropping
///   the last clone unmounts the screen.
/// * **Async API** – all methods resolve to `Result<…, FlowError>`.
/// * **Generic** – works with any type implementing [`Screen`].
pub struct ScreenClient<S: Screen> {
    sender: mpsc::Sender<ScreenRequest<S>>,
}

impl<S: Screen> Clone for ScreenClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Screen> ScreenClient<S> {
    pub fn new(sender: mpsc::Sender<ScreenRequest<S>>) -> Self {
        Self { sender }
    }

    /// Delivers a user-interaction event and returns the refreshed view.
    pub async fn dispatch(&self, event: S::Event) -> Result<S::View, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Event { event, respond_to })
            .await
            .map_err(|_| FlowError::ScreenClosed)?;
        response.await.map_err(|_| FlowError::ScreenDropped)?
    }

    /// Runs a screen-specific command and returns its outcome.
    pub async fn command(&self, command: S::Command) -> Result<S::Outcome, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FlowError::ScreenClosed)?;
        response.await.map_err(|_| FlowError::ScreenDropped)?
    }

    /// Fetches a snapshot of the screen's current view.
    pub async fn view(&self) -> Result<S::View, FlowError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::View { respond_to })
            .await
            .map_err(|_| FlowError::ScreenClosed)?;
        response.await.map_err(|_| FlowError::ScreenDropped)?
    }
}
