//! # Menu Order
//!
//! A menu-browsing and order-building flow on top of
//! [`screen_flow`]: a section list fetched once from a catalog endpoint, an
//! item-detail screen with single-select modifier groups and a quantity
//! stepper, and a basket that re-derives its totals from an immutable
//! order-line snapshot.
//!
//! ## Core Components
//!
//! - **[model]**: pure data: catalog document, [`Money`](model::Money) in
//!   integer cents, selection state, the shared pricing formula, and the
//!   [`OrderLine`](model::OrderLine) snapshot.
//! - **[catalog]**: the external fetch collaborator behind the
//!   [`CatalogSource`](catalog::CatalogSource) trait.
//! - **[menu_screen]**, **[item_screen]**, **[basket_screen]**: the three
//!   screens as [`Screen`](screen_flow::Screen) implementations.
//! - **[clients]**: typed wrappers ([`MenuClient`](clients::MenuClient), …)
//!   that hide message passing.
//! - **[lifecycle]**: the [`OrderFlow`](lifecycle::OrderFlow) navigation
//!   orchestrator with cancellation-on-unmount.
//!
//! ## Quick Start
//!
//! The entry point is in `main`, which walks the whole flow: fetch the menu,
//! configure an item, commit it, and adjust the basket.

pub mod basket_screen;
pub mod catalog;
pub mod clients;
pub mod item_screen;
pub mod lifecycle;
pub mod menu_screen;
pub mod model;
