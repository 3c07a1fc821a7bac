//! Type-safe wrappers hiding message passing from the rest of the app.
//!
//! Each screen gets a domain client exposing its interactions as plain async
//! methods; the generic plumbing lives in
//! [`FlowClient`](screen_flow::FlowClient).

pub mod basket_client;
pub mod item_client;
pub mod menu_client;

pub use basket_client::BasketClient;
pub use item_client::ItemClient;
pub use menu_client::MenuClient;
