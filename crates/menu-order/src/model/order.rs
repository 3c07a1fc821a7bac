//! Quantity stepper semantics and the order-line snapshot handed to the basket.

use crate::model::{pricing, MenuItem, Money, SelectionState};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A positive item count with a floor of 1.
///
/// Stepped by exactly one per user action; decrementing at the floor is a
/// no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Creates a quantity, clamping zero up to the floor of 1.
    pub fn new(count: u32) -> Self {
        Self(count.max(1))
    }

    pub const fn count(self) -> u32 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 += 1;
    }

    /// Decrements unless already at the floor.
    pub fn decrease(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when composing an order line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The configured item prices at zero (or below) and cannot be committed.
    #[error("Order total must be positive, got {0}")]
    ZeroPriced(Money),
}

/// Immutable snapshot of one configured item at the moment the user commits.
///
/// This is the sole hand-off between the item-detail and basket screens, and it
/// crosses that boundary as a value: the basket seeds its own mutable quantity
/// from it and re-derives the total with the shared pricing formula rather than
/// trusting `total` after creation.
///
/// Fields are private so the only way to obtain an `OrderLine` is
/// [`OrderLine::compose`], which enforces the positive-total guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    item: MenuItem,
    quantity: Quantity,
    selection: SelectionState,
    total: Money,
}

impl OrderLine {
    /// Materializes an order line from the current item configuration.
    ///
    /// The total is computed with the shared formula and must be strictly
    /// positive: a hypothetical free item is not committable.
    pub fn compose(
        item: MenuItem,
        selection: SelectionState,
        quantity: Quantity,
    ) -> Result<Self, OrderError> {
        let total = pricing::total_price(&item, &selection, quantity);
        if !total.is_positive() {
            return Err(OrderError::ZeroPriced(total));
        }
        Ok(Self {
            item,
            quantity,
            selection,
            total,
        })
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The total price at creation time.
    pub fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModifierGroup, ModifierOption};

    fn coffee() -> MenuItem {
        MenuItem {
            name: "Coffee".into(),
            price: Money::from_minor(500),
            description: None,
            images: None,
            modifiers: vec![ModifierGroup {
                name: "Milk".into(),
                options: vec![ModifierOption {
                    name: "Oat".into(),
                    price: Money::from_minor(80),
                }],
            }],
        }
    }

    #[test]
    fn quantity_floor_is_idempotent() {
        let mut quantity = Quantity::ONE;
        quantity.decrease();
        assert_eq!(quantity, Quantity::ONE);

        quantity.increase();
        quantity.increase();
        quantity.decrease();
        assert_eq!(quantity.count(), 2);

        assert_eq!(Quantity::new(0), Quantity::ONE);
    }

    #[test]
    fn compose_snapshots_the_configuration() {
        let mut selection = SelectionState::new();
        selection.select("Milk", "Oat");

        let line = OrderLine::compose(coffee(), selection.clone(), Quantity::new(2)).unwrap();
        assert_eq!(line.total(), Money::from_minor(1160));
        assert_eq!(line.quantity().count(), 2);
        assert_eq!(line.selection(), &selection);
    }

    #[test]
    fn compose_rejects_a_zero_priced_order() {
        let free = MenuItem {
            name: "Tap Water".into(),
            price: Money::ZERO,
            description: None,
            images: None,
            modifiers: vec![],
        };

        let result = OrderLine::compose(free, SelectionState::new(), Quantity::ONE);
        assert_eq!(result.unwrap_err(), OrderError::ZeroPriced(Money::ZERO));
    }

    #[test]
    fn snapshot_total_matches_a_recomputation() {
        // Round-trip: the basket recomputing with unchanged inputs must agree
        let mut selection = SelectionState::new();
        selection.select("Milk", "Oat");
        let quantity = Quantity::new(3);

        let line = OrderLine::compose(coffee(), selection, quantity).unwrap();
        let recomputed = pricing::total_price(line.item(), line.selection(), line.quantity());
        assert_eq!(recomputed, line.total());
    }
}
