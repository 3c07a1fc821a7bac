//! Screen implementation for the item-detail state.

use crate::item_screen::ItemScreenError;
use crate::model::{pricing, MenuItem, Money, OrderLine, Quantity, SelectionState};
use async_trait::async_trait;
use screen_flow::Screen;
use tracing::warn;

/// State of the item-detail screen: the catalog item under configuration, the
/// user's modifier picks, and the quantity.
#[derive(Debug)]
pub struct ItemScreen {
    item: MenuItem,
    selection: SelectionState,
    quantity: Quantity,
}

/// User interactions on the item-detail screen.
#[derive(Debug)]
pub enum ItemEvent {
    /// Tap on a modifier option checkbox. Overwrites any prior pick in the
    /// same group (single-select).
    SelectOption { group: String, option: String },
    /// Tap on the `+` stepper.
    IncreaseQuantity,
    /// Tap on the `-` stepper. A no-op at quantity 1.
    DecreaseQuantity,
}

/// Request/response operations on the item-detail screen.
#[derive(Debug)]
pub enum ItemCommand {
    /// Commit the current configuration as an immutable order line.
    AddToOrder,
}

/// Immutable snapshot of the configuration, with the live prices the UI shows
/// next to the stepper and on the "Add to Order" button.
#[derive(Debug, Clone)]
pub struct ItemView {
    pub item_name: String,
    pub selection: SelectionState,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

#[async_trait]
impl Screen for ItemScreen {
    type Params = MenuItem;
    type Event = ItemEvent;
    type Command = ItemCommand;
    type Outcome = OrderLine;
    type View = ItemView;
    type Context = ();
    type Error = ItemScreenError;

    fn mount(item: MenuItem) -> Self {
        Self {
            item,
            selection: SelectionState::new(),
            quantity: Quantity::ONE,
        }
    }

    async fn on_event(&mut self, event: ItemEvent, _ctx: &()) -> Result<(), ItemScreenError> {
        match event {
            ItemEvent::SelectOption { group, option } => {
                // A pair the catalog doesn't know is dropped, not recorded:
                // recording it would make the later price lookup silently skip
                // a choice the user believes is active.
                if self.item.has_option(&group, &option) {
                    self.selection.select(group, option);
                } else {
                    warn!(item = %self.item.name, group, option, "Ignoring selection not in catalog");
                }
            }
            ItemEvent::IncreaseQuantity => self.quantity.increase(),
            ItemEvent::DecreaseQuantity => self.quantity.decrease(),
        }
        Ok(())
    }

    async fn on_command(
        &mut self,
        command: ItemCommand,
        _ctx: &(),
    ) -> Result<OrderLine, ItemScreenError> {
        match command {
            ItemCommand::AddToOrder => Ok(OrderLine::compose(
                self.item.clone(),
                self.selection.clone(),
                self.quantity,
            )?),
        }
    }

    fn view(&self) -> ItemView {
        ItemView {
            item_name: self.item.name.clone(),
            selection: self.selection.clone(),
            quantity: self.quantity.count(),
            unit_price: pricing::unit_price(&self.item, &self.selection),
            total_price: pricing::total_price(&self.item, &self.selection, self.quantity),
        }
    }
}
