//! # Generic Screen Actor
//!
//! This module defines the `ScreenActor`, the task that owns one screen's state
//! and processes its interaction events. It is the "Server" side of the model:
//! messages are handled sequentially, so the state has exactly one writer.

use crate::client::ScreenClient;
use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::screen::Screen;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task-side owner of a single screen's state.
///
/// # Architecture Note
/// This struct is the "Server" half of a screen. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each mounted screen processes its messages *sequentially* in its own task.
/// No `Mutex` or `RwLock` is needed for the state; exclusive ownership within
/// the task gives the same guarantee a single-threaded UI loop does.
///
/// # Usage Pattern
///
/// 1. **Mount**: Call `ScreenActor::mount(params, buffer)` to get the actor
///    (server) and the [`ScreenClient`] (interface).
/// 2. **Wire**: Pass dependencies (e.g. a catalog source) into `actor.run(context)`.
/// 3. **Run**: Spawn the run loop in a background task.
///
/// # Implementation Details
///
/// * **Mount hook**: `run` awaits [`Screen::on_mount`] before serving requests.
///   This is the screen's one and only suspending operation (e.g. the catalog
///   fetch); requests sent meanwhile queue in the channel and are answered once
///   the hook finishes. A hook error is logged and the screen keeps serving its
///   (empty) state; there is no fatal class here.
/// * **Event**: applies [`Screen::on_event`] and answers with the refreshed view.
/// * **Command**: runs [`Screen::on_command`] and answers with its outcome.
/// * **View**: answers with a clone of the current view.
/// * **Unmount**: when every client handle is dropped the channel closes and the
///   loop exits. An orchestrator may also abort the task outright to cancel a
///   load still in flight.
pub struct ScreenActor<S: Screen> {
    receiver: mpsc::Receiver<ScreenRequest<S>>,
    state: S,
}

impl<S: Screen> ScreenActor<S> {
    /// Mounts a screen from its navigation params and returns the actor together
    /// with its [`ScreenClient`].
    ///
    /// # Arguments
    ///
    /// * `params` - The navigation parameters the screen is constructed from.
    /// * `buffer_size` - Capacity of the MPSC channel. If the channel is full,
    ///   client calls wait until there is space.
    pub fn mount(params: S::Params, buffer_size: usize) -> (Self, ScreenClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: S::mount(params),
        };
        let client = ScreenClient::new(sender);
        (actor, client)
    }

    /// Runs the screen's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every hook. This allows screens to
    /// access dependencies (like a catalog source) wired up *after* the screen was
    /// constructed but *before* the loop starts.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g. "MenuScreen" instead of the full path)
        let screen = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(screen, "Screen mounted");

        if let Err(e) = self.state.on_mount(&context).await {
            warn!(screen, error = %e, "on_mount failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ScreenRequest::Event { event, respond_to } => {
                    debug!(screen, ?event, "Event");
                    match self.state.on_event(event, &context).await {
                        Ok(()) => {
                            let _ = respond_to.send(Ok(self.state.view()));
                        }
                        Err(e) => {
                            warn!(screen, error = %e, "Event failed");
                            let _ = respond_to.send(Err(FlowError::ScreenError(Box::new(e))));
                        }
                    }
                }
                ScreenRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(screen, ?command, "Command");
                    let result = self
                        .state
                        .on_command(command, &context)
                        .await
                        .map_err(|e| FlowError::ScreenError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(screen, "Command ok"),
                        Err(e) => warn!(screen, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ScreenRequest::View { respond_to } => {
                    debug!(screen, "View");
                    let _ = respond_to.send(Ok(self.state.view()));
                }
            }
        }

        info!(screen, "Screen unmounted");
    }
}
