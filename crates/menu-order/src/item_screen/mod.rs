//! # Item-Detail Screen
//!
//! Configuration of one menu item: modifier selection, quantity stepping, and
//! the commit that hands an [`OrderLine`](crate::model::OrderLine) to the
//! basket.
//!
//! ## Structure
//!
//! - [`entity`] - [`Screen`](screen_flow::Screen) implementation for [`ItemScreen`]
//! - [`error`] - [`ItemScreenError`] for type-safe error handling
//! - [`mount()`] - Factory that creates the actor and client
//!
//! ## Semantics
//!
//! - Selecting an option **replaces** the prior pick in its group; every group
//!   is single-select and selecting nothing in a group is valid.
//! - A selection naming a group/option the item doesn't carry is ignored with
//!   a warning; state and price stay unchanged.
//! - Quantity steps by one with a floor of 1.
//! - `AddToOrder` snapshots the configuration via
//!   [`OrderLine::compose`](crate::model::OrderLine::compose) and refuses a
//!   zero-priced total, mirroring the UI hiding the button in that state.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::model::MenuItem;
use screen_flow::{ScreenActor, ScreenClient};

/// Mounts the item-detail screen for one catalog item.
pub fn mount(item: MenuItem) -> (ScreenActor<ItemScreen>, ScreenClient<ItemScreen>) {
    ScreenActor::mount(item, 32)
}
