//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ScreenClient` and `ScreenActor`.

use crate::error::FlowError;
use crate::screen::Screen;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by screen actors.
pub type Response<T> = oneshot::Sender<Result<T, FlowError>>;

/// Internal message type sent to a screen's task.
///
/// # Event-Driven UI Model
/// Every variant corresponds to a discrete user interaction. The screen's task
/// processes them strictly in arrival order, which is exactly the single-threaded
/// event model a UI gives you: no locks, no concurrent writers.
///
/// - **Event**: a state-mutating interaction. Answers with the refreshed view so
///   the caller sees the effect of its own tap (the render after `setState`).
/// - **Command**: a request/response operation with a screen-specific result
///   (e.g. committing an order line).
/// - **View**: a read-only snapshot of the current state.
///
/// # Screen Interaction
/// The enum is generic over `S: Screen` and uses the associated types defined on
/// the [`Screen`] trait, so a basket event can never be delivered to the menu
/// screen.
#[derive(Debug)]
pub enum ScreenRequest<S: Screen> {
    Event {
        event: S::Event,
        respond_to: Response<S::View>,
    },
    Command {
        command: S::Command,
        respond_to: Response<S::Outcome>,
    },
    View { respond_to: Response<S::View> },
}
