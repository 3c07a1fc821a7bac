//! # FlowClient Trait
//!
//! Provides a common interface for screen-specific clients, adding a default
//! `view` method built on top of the generic `ScreenClient`.

use crate::{FlowError, Screen, ScreenClient};
use async_trait::async_trait;

/// Trait for screen-specific clients to inherit the standard read operation.
///
/// Typed clients (menu, item detail, basket) wrap a [`ScreenClient`] and expose
/// domain methods; this trait supplies the shared `view()` plumbing and the
/// error mapping each client defines once.
///
/// # Example
///
/// ```rust
/// use screen_flow::{FlowClient, FlowError, Screen, ScreenClient};
/// use async_trait::async_trait;
///
/// // 1. Define a Screen
/// #[derive(Debug)]
/// struct Greeter { greeting: String }
/// #[derive(Debug)] enum GreeterEvent {}
/// #[derive(Debug)] enum GreeterCommand {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("greeter error: {0}")]
/// struct GreeterError(String);
///
/// impl From<String> for GreeterError {
///     fn from(s: String) -> Self { GreeterError(s) }
/// }
///
/// #[async_trait]
/// impl Screen for Greeter {
///     type Params = String;
///     type Event = GreeterEvent;
///     type Command = GreeterCommand;
///     type Outcome = ();
///     type View = String;
///     type Context = ();
///     type Error = GreeterError;
///
///     fn mount(greeting: String) -> Self { Self { greeting } }
///     async fn on_event(&mut self, event: GreeterEvent, _: &()) -> Result<(), GreeterError> {
///         match event {}
///     }
///     async fn on_command(&mut self, command: GreeterCommand, _: &()) -> Result<(), GreeterError> {
///         match command {}
///     }
///     fn view(&self) -> String { self.greeting.clone() }
/// }
///
/// // 2. Define a Client Wrapper
/// struct GreeterClient { inner: ScreenClient<Greeter> }
///
/// // 3. Implement FlowClient
/// #[async_trait]
/// impl FlowClient<Greeter> for GreeterClient {
///     type Error = GreeterError;
///
///     fn inner(&self) -> &ScreenClient<Greeter> { &self.inner }
///
///     fn map_error(e: FlowError) -> Self::Error {
///         GreeterError(e.to_string())
///     }
/// }
///
/// // 4. Usage: view() comes for free
/// async fn usage(client: GreeterClient) {
///     let _ = client.view().await;
/// }
/// ```
#[async_trait]
pub trait FlowClient<S: Screen>: Send + Sync {
    /// The screen-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ScreenClient.
    fn inner(&self) -> &ScreenClient<S>;

    /// Map framework errors to the specific screen error type.
    fn map_error(e: FlowError) -> Self::Error;

    /// Fetch the screen's current view.
    #[tracing::instrument(skip(self))]
    async fn view(&self) -> Result<S::View, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().view().await.map_err(Self::map_error)
    }
}
