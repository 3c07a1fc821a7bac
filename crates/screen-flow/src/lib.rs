//! # Screen Flow
//!
//! > **Single-owner screen state over Tokio tasks.**
//!
//! This crate provides the plumbing for an event-driven UI flow: each screen's
//! state lives in its own task, user interactions arrive as messages, and other
//! components only ever see immutable view snapshots.
//!
//! ## Design
//!
//! A mobile UI is already an actor system in disguise: one owner per screen's
//! state, discrete interaction events, no concurrent writers. Making that
//! explicit buys:
//!
//! - **Isolation**: screen state has exactly one writer, no locks.
//! - **Value hand-off**: screens exchange immutable snapshots, never live references.
//! - **Type Safety**: a screen only accepts its own event and command types.
//!
//! ## Generics: The Power of `S`
//!
//! You'll see `ScreenActor<S: Screen>` everywhere. The message loop is written
//! **once** and works for any screen (menu list, item detail, basket) that
//! implements the [`Screen`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use screen_flow::{Screen, ScreenActor};
//! use async_trait::async_trait;
//!
//! // Minimal Screen Definition
//! #[derive(Debug)] struct Tally { count: u32 }
//! #[derive(Debug)] enum TallyEvent { Bump }
//! #[derive(Debug)] enum TallyCommand {}
//! #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
//!
//! #[async_trait]
//! impl Screen for Tally {
//!     type Params = ();
//!     type Event = TallyEvent;
//!     type Command = TallyCommand;
//!     type Outcome = ();
//!     type View = u32;
//!     type Context = (); // No dependencies in this example
//!     type Error = TallyError;
//!
//!     fn mount(_: ()) -> Self { Self { count: 0 } }
//!     async fn on_event(&mut self, event: TallyEvent, _: &()) -> Result<(), TallyError> {
//!         match event { TallyEvent::Bump => self.count += 1 }
//!         Ok(())
//!     }
//!     async fn on_command(&mut self, command: TallyCommand, _: &()) -> Result<(), TallyError> {
//!         match command {}
//!     }
//!     fn view(&self) -> u32 { self.count }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Mount
//!     let (actor, client) = ScreenActor::<Tally>::mount((), 10);
//!
//!     // 2. Wire & Run
//!     tokio::spawn(actor.run(()));
//!
//!     // 3. Interact
//!     let view = client.dispatch(TallyEvent::Bump).await.unwrap();
//!     assert_eq!(view, 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at mount time. A
//! screen that performs a one-shot load declares the source as its `Context`
//! and overrides [`Screen::on_mount`]; the orchestrator passes the source when
//! it spawns the task. Requests arriving during the load queue up and are
//! answered once it finishes.
//!
//! ## Concurrency Model
//!
//! - Each screen runs in its own Tokio task
//! - Messages are processed **sequentially** within a screen (no locks needed!)
//! - The only suspending operation is a screen's `on_mount` load
//! - Unmounting a screen mid-load cancels the load, so a stale response can never
//!   be applied to a screen that is gone
//!
//! ## Testing
//!
//! The crate provides a **MockClient** that hands out real `ScreenClient<S>`
//! handles but answers from queued expectations, entirely in-memory. See the
//! [`mock`] module for the full API and usage patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod screen;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ScreenActor;
pub use client::ScreenClient;
pub use client_trait::FlowClient;
pub use error::FlowError;
pub use message::{Response, ScreenRequest};
pub use screen::Screen;
