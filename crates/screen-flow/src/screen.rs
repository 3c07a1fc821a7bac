//! # Screen Trait
//!
//! The `Screen` trait defines the contract that every screen state type (menu list,
//! item detail, basket, …) must implement to be driven by the generic `ScreenActor`.
//! It specifies associated types for navigation params, events, commands, views,
//! context, and errors, and provides async hooks (`on_mount`, `on_event`,
//! `on_command`). Implementing this trait gives any screen a uniform
//! event/command/view API.
//!
//! # Architecture Note
//! Why do we need this trait?
//! By defining a contract (`Screen`) that all our screen types must satisfy, we
//! write the message loop *once* in `ScreenActor` and reuse it for every screen.
//!
//! We use "Associated Types" (type Params, type Event, etc.) to enforce type
//! safety. A basket screen only accepts basket events; the compiler rejects a
//! menu event sent to it, eliminating that class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! [`Screen::on_mount`] has a default no-op implementation. Only screens that
//! perform a one-shot load on mount (e.g. a catalog fetch) need to override it.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any screen state type must implement to be driven by `ScreenActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous work in hooks (e.g. the
/// one-shot catalog fetch on mount). It also defines a `Context` type injected
/// into every hook, which allows "Late Binding" of dependencies (passing a data
/// source to `run()` instead of `mount()`).
///
/// # Events vs Commands
/// - **Events** mutate screen state and answer with the refreshed [`Screen::View`]
///   (a tap on a quantity stepper, a modifier checkbox, …).
/// - **Commands** are request/response operations that produce a value without
///   being part of the view cycle (e.g. "add to order" handing back an order
///   line). Their result type is [`Screen::Outcome`].
#[async_trait]
pub trait Screen: Send + 'static {
    /// The navigation parameters this screen is mounted with.
    /// Use `()` for a root screen that receives nothing.
    type Params: Send + Debug;

    /// User-interaction events that mutate the screen state.
    type Event: Send + Debug;

    /// Request/response operations beyond plain state mutation.
    type Command: Send + Debug;

    /// The result type returned by commands.
    type Outcome: Send + Debug;

    /// Immutable projection of the screen state handed to callers.
    type View: Clone + Send + Debug;

    /// The runtime context (dependencies) injected into the screen's task.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this screen.
    /// Must implement std::error::Error for proper error propagation.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per screen, not one per message. The enum is the union of
    /// everything the screen can fail with, which keeps client signatures and
    /// pattern matching simple at the cost of some theoretical precision.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the initial screen state from its navigation params.
    /// This is called synchronously before the task starts.
    fn mount(params: Self::Params) -> Self
    where
        Self: Sized;

    // --- Lifecycle Hooks (Async) ---

    /// Called once when the screen's task starts, before any message is served.
    /// This is where a screen performs its one-shot load. Requests sent while
    /// the hook is still running queue up and are answered afterwards.
    async fn on_mount(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a user-interaction event to the screen state.
    async fn on_event(
        &mut self,
        event: Self::Event,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handle a screen-specific command and produce its outcome.
    async fn on_command(
        &mut self,
        command: Self::Command,
        _ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Project the current state into the immutable view handed to callers.
    fn view(&self) -> Self::View;
}
