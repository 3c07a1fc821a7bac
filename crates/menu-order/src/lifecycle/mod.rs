//! # Flow Lifecycle & Navigation
//!
//! Screens are simple; **wiring them together** is where the complexity lives.
//! This module provides the "navigation stack": mounting screens, passing
//! values between them, and unmounting what the user navigates away from.
//!
//! ## Responsibilities
//!
//! 1. **Screen Creation** - mount each screen's task with its params
//! 2. **Dependency Injection** - hand the catalog source to the menu screen at
//!    `run()` time, not at construction (late binding)
//! 3. **Value Hand-off** - a [`MenuItem`](crate::model::MenuItem) flows to the
//!    detail screen, an [`OrderLine`](crate::model::OrderLine) to the basket,
//!    always by value
//! 4. **Cancellation on Unmount** - replacing or closing a screen aborts its
//!    task; a fetch still in flight dies with it instead of landing on a dead
//!    screen
//! 5. **Graceful Shutdown** - unmount everything, newest first, and report
//!    panics
//!
//! ## Observability
//!
//! Call [`screen_flow::tracing::setup_tracing`] once at startup; every mount,
//! event, command, and unmount is logged with structured fields.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full event payloads
//! ```

pub mod order_flow;

pub use order_flow::*;
