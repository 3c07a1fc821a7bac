//! # Mock Framework & Testing Guide
//!
//! The `MockClient<S>` type stands in for a real `ScreenActor<S>`: it hands out
//! the same `ScreenClient<S>` handles but answers requests from a queue of
//! expectations instead of real state, enabling fast, deterministic tests of
//! client logic without spawning any screen tasks.
//!
//! ## When to use Mocks vs Real Screens
//!
//! | Feature | MockClient | Real Screen |
//! |---------|------------|-------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state transitions |
//! | **Use Case** | Unit testing logic *around* the client | Testing the screen itself or full flow |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! - **Client logic**: wrap `MockClient::client()` in a typed client and queue
//!   expectations with `expect_event` / `expect_command` / `expect_view`.
//! - **Single screen**: spawn a real [`ScreenActor`](crate::ScreenActor) and
//!   drive it through its client, no mocks needed.
//! - **Raw channel**: `create_mock_client` hands back the request receiver so a
//!   test can assert the exact message a client sends and answer it by hand.
//! - **Full flow**: mount every screen and exercise the end-to-end path; see the
//!   integration tests of the consuming crate.

use crate::client::ScreenClient;
use crate::error::FlowError;
use crate::message::ScreenRequest;
use crate::screen::Screen;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A queued expectation for the mock's background task.
#[derive(Debug)]
enum Expectation<S: Screen> {
    Event { response: Result<S::View, FlowError> },
    Command { response: Result<S::Outcome, FlowError> },
    View { response: Result<S::View, FlowError> },
}

/// Expectation-based mock standing in for a screen task.
///
/// # Usage
/// ```ignore
/// let mut mock = MockClient::<ItemScreen>::new();
/// mock.expect_view().return_ok(view);
///
/// let client = ItemClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockClient<S: Screen> {
    client: ScreenClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Screen> Default for MockClient<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> MockClient<S> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ScreenRequest<S>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answering requests from the expectation queue
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps);

                match (request, expectation) {
                    (
                        ScreenRequest::Event {
                            event: _,
                            respond_to,
                        },
                        Some(Expectation::Event { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::Command {
                            command: _,
                            respond_to,
                        },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::View { respond_to },
                        Some(Expectation::View { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ScreenClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ScreenClient<S> {
        self.client.clone()
    }

    /// Expects an event dispatch.
    pub fn expect_event(&mut self) -> EventExpectationBuilder<S> {
        EventExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<S> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a view request.
    pub fn expect_view(&mut self) -> ViewExpectationBuilder<S> {
        ViewExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for event expectations.
pub struct EventExpectationBuilder<S: Screen> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: Screen> EventExpectationBuilder<S> {
    /// Sets the expectation to return the given refreshed view.
    pub fn return_ok(self, view: S::View) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Event { response: Ok(view) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Event {
            response: Err(error),
        });
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<S: Screen> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: Screen> CommandExpectationBuilder<S> {
    /// Sets the expectation to return a successful outcome.
    pub fn return_ok(self, outcome: S::Outcome) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Ok(outcome),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for view expectations.
pub struct ViewExpectationBuilder<S: Screen> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: Screen> ViewExpectationBuilder<S> {
    /// Sets the expectation to return the given view.
    pub fn return_ok(self, view: S::View) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::View { response: Ok(view) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FlowError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::View {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When the thing under test is the *client* logic, there is no need to mount a
/// full `ScreenActor`. This client sends its messages to a channel the test
/// controls; the test inspects the messages and answers them by hand, simulating
/// the screen's behavior (success, failure, delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<S: Screen>(
    buffer_size: usize,
) -> (ScreenClient<S>, mpsc::Receiver<ScreenRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ScreenClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Event request
pub async fn expect_event<S: Screen>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<(
    S::Event,
    tokio::sync::oneshot::Sender<Result<S::View, FlowError>>,
)> {
    match receiver.recv().await {
        Some(ScreenRequest::Event { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Command request
pub async fn expect_command<S: Screen>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<(
    S::Command,
    tokio::sync::oneshot::Sender<Result<S::Outcome, FlowError>>,
)> {
    match receiver.recv().await {
        Some(ScreenRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a View request
pub async fn expect_view<S: Screen>(
    receiver: &mut mpsc::Receiver<ScreenRequest<S>>,
) -> Option<tokio::sync::oneshot::Sender<Result<S::View, FlowError>>> {
    match receiver.recv().await {
        Some(ScreenRequest::View { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Counter {
        count: u32,
    }

    #[derive(Debug)]
    enum CounterEvent {
        Increment,
    }

    #[derive(Debug)]
    enum CounterCommand {
        Take,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    #[async_trait]
    impl Screen for Counter {
        type Params = u32;
        type Event = CounterEvent;
        type Command = CounterCommand;
        type Outcome = u32;
        type View = u32;
        type Context = ();
        type Error = CounterError;

        fn mount(start: u32) -> Self {
            Self { count: start }
        }

        async fn on_event(&mut self, event: CounterEvent, _: &()) -> Result<(), CounterError> {
            match event {
                CounterEvent::Increment => self.count += 1,
            }
            Ok(())
        }

        async fn on_command(&mut self, command: CounterCommand, _: &()) -> Result<u32, CounterError> {
            match command {
                CounterCommand::Take => Ok(self.count),
            }
        }

        fn view(&self) -> u32 {
            self.count
        }
    }

    #[tokio::test]
    async fn mock_answers_queued_expectations_in_order() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_event().return_ok(1);
        mock.expect_view().return_ok(1);
        mock.expect_command().return_ok(1);

        let client = mock.client();
        assert_eq!(client.dispatch(CounterEvent::Increment).await.unwrap(), 1);
        assert_eq!(client.view().await.unwrap(), 1);
        assert_eq!(client.command(CounterCommand::Take).await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn raw_helpers_expose_the_request() {
        let (client, mut receiver) = create_mock_client::<Counter>(10);

        let task = tokio::spawn(async move { client.command(CounterCommand::Take).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, CounterCommand::Take));
        responder.send(Ok(7)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 7);
    }
}
