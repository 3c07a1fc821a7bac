//! # Basket Screen
//!
//! The order-summary screen: re-displays one committed order line and lets the
//! user adjust its quantity.
//!
//! ## Semantics
//!
//! The screen is mounted with an [`OrderLine`] value and immediately unpacks
//! it: quantity becomes this screen's own mutable copy, the selection is kept
//! read-only (there is no UI to re-select modifiers here). On every quantity
//! change the total is **recomputed** through the shared pricing formula; the
//! snapshot's stored total is never trusted after creation.
//!
//! Subtotal and total are numerically identical in this slice; no tax,
//! discount, or fee layer exists, and checkout submission is out of scope.

pub mod error;

pub use error::*;

use crate::model::{pricing, MenuItem, Money, OrderLine, Quantity, SelectionState};
use async_trait::async_trait;
use screen_flow::{Screen, ScreenActor, ScreenClient};

/// State of the basket screen.
#[derive(Debug)]
pub struct BasketScreen {
    item: MenuItem,
    selection: SelectionState,
    quantity: Quantity,
}

/// User interactions on the basket screen.
#[derive(Debug)]
pub enum BasketEvent {
    /// Tap on the `+` stepper.
    IncreaseQuantity,
    /// Tap on the `-` stepper. A no-op at quantity 1.
    DecreaseQuantity,
}

/// Request/response operations on the basket screen.
///
/// "Checkout now" is a visual no-op in this slice, so there are none.
#[derive(Debug)]
pub enum BasketCommand {}

/// Immutable snapshot of the basket, with the derived amounts the UI renders.
#[derive(Debug, Clone)]
pub struct BasketView {
    pub item_name: String,
    /// The chosen option names listed under the item, in group order.
    pub chosen_options: Vec<String>,
    pub quantity: u32,
    pub subtotal: Money,
    pub total: Money,
}

#[async_trait]
impl Screen for BasketScreen {
    type Params = OrderLine;
    type Event = BasketEvent;
    type Command = BasketCommand;
    type Outcome = ();
    type View = BasketView;
    type Context = ();
    type Error = BasketError;

    fn mount(line: OrderLine) -> Self {
        Self {
            item: line.item().clone(),
            selection: line.selection().clone(),
            quantity: line.quantity(),
        }
    }

    async fn on_event(&mut self, event: BasketEvent, _ctx: &()) -> Result<(), BasketError> {
        match event {
            BasketEvent::IncreaseQuantity => self.quantity.increase(),
            BasketEvent::DecreaseQuantity => self.quantity.decrease(),
        }
        Ok(())
    }

    async fn on_command(&mut self, command: BasketCommand, _ctx: &()) -> Result<(), BasketError> {
        match command {}
    }

    fn view(&self) -> BasketView {
        let total = pricing::total_price(&self.item, &self.selection, self.quantity);
        BasketView {
            item_name: self.item.name.clone(),
            chosen_options: self.selection.options().map(str::to_owned).collect(),
            quantity: self.quantity.count(),
            subtotal: total,
            total,
        }
    }
}

/// Mounts the basket screen for one committed order line.
pub fn mount(line: OrderLine) -> (ScreenActor<BasketScreen>, ScreenClient<BasketScreen>) {
    ScreenActor::mount(line, 32)
}
