//! # Observability & Tracing
//!
//! One-call setup for structured logging across a screen flow.
//!
//! ## What Gets Traced
//!
//! - **Screen Lifecycle**: mount, unmount
//! - **Interactions**: every Event, Command, and View request with structured fields
//! - **Failures**: fetch errors and ignored selections, with full context
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full event payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=screen_flow=debug cargo run
//! ```
//!
//! The compact format shows span hierarchy inline
//! (e.g. `order_building:select_option`), and `with_target(false)` keeps lines
//! short; the `screen` field identifies the source instead of the module path.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the screen field covers it
        .compact() // Compact format shows spans inline (e.g. "order_building:add_to_order")
        .init();
}
