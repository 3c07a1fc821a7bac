//! The price formula shared by the item-detail and basket screens.
//!
//! Pure functions over their inputs; both screens must agree on the total, so
//! there is exactly one implementation.

use crate::model::{MenuItem, Money, Quantity, SelectionState};

/// Price of one unit: base price plus the delta of every selected option that
/// still resolves in the item's modifier groups.
///
/// A selection naming a group or option the item no longer carries contributes
/// zero; lookup misses are not errors.
pub fn unit_price(item: &MenuItem, selection: &SelectionState) -> Money {
    let mut price = item.price;
    for (group, option) in selection.iter() {
        if let Some(option) = item.modifier_group(group).and_then(|g| g.option(option)) {
            price += option.price;
        }
    }
    price
}

/// Unit price multiplied by the quantity.
pub fn total_price(item: &MenuItem, selection: &SelectionState, quantity: Quantity) -> Money {
    unit_price(item, selection) * quantity.count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModifierGroup, ModifierOption};

    fn burger() -> MenuItem {
        MenuItem {
            name: "Classic Burger".into(),
            price: Money::from_minor(1000),
            description: None,
            images: None,
            modifiers: vec![ModifierGroup {
                name: "Size".into(),
                options: vec![
                    ModifierOption {
                        name: "Small".into(),
                        price: Money::ZERO,
                    },
                    ModifierOption {
                        name: "Large".into(),
                        price: Money::from_minor(250),
                    },
                ],
            }],
        }
    }

    #[test]
    fn no_selection_prices_at_base_times_quantity() {
        let item = burger();
        let selection = SelectionState::new();
        for q in 1..=5u32 {
            let quantity = Quantity::new(q);
            assert_eq!(
                total_price(&item, &selection, quantity),
                item.price * q
            );
        }
    }

    #[test]
    fn selected_option_delta_is_added_before_multiplying() {
        // base 10.00, "Size"/"Large" +2.50, quantity 3 => 37.50
        let item = burger();
        let mut selection = SelectionState::new();
        selection.select("Size", "Large");

        let total = total_price(&item, &selection, Quantity::new(3));
        assert_eq!(total, Money::from_minor(3750));
        assert_eq!(total.to_string(), "37.50");
    }

    #[test]
    fn lookup_misses_contribute_zero() {
        let item = burger();
        let mut selection = SelectionState::new();
        selection.select("Size", "Gigantic"); // option gone from the catalog
        selection.select("Extras", "Bacon"); // group gone from the catalog

        assert_eq!(unit_price(&item, &selection), item.price);
    }

    #[test]
    fn price_is_monotonic_in_quantity() {
        let item = burger();
        let mut selection = SelectionState::new();
        selection.select("Size", "Large");

        let mut last = Money::ZERO;
        for q in 1..=10u32 {
            let total = total_price(&item, &selection, Quantity::new(q));
            assert!(total > last);
            last = total;
        }
    }
}
