//! Tests of the item-detail screen against a real mounted actor.

use menu_order::clients::ItemClient;
use menu_order::item_screen::{self, ItemScreenError};
use menu_order::model::{
    MenuItem, ModifierGroup, ModifierOption, Money, OrderError,
};

fn burger() -> MenuItem {
    MenuItem {
        name: "Classic Burger".into(),
        price: Money::from_minor(1000),
        description: Some("Beef patty, lettuce, tomato".into()),
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

fn free_item() -> MenuItem {
    MenuItem {
        name: "Tap Water".into(),
        price: Money::ZERO,
        description: None,
        images: None,
        modifiers: vec![],
    }
}

#[tokio::test]
async fn test_live_price_follows_selection_and_quantity() {
    let (actor, client) = item_screen::mount(burger());
    tokio::spawn(actor.run(()));
    let client = ItemClient::new(client);

    let view = client.select_option("Size", "Large").await.unwrap();
    assert_eq!(view.unit_price, Money::from_minor(1250));
    assert_eq!(view.total_price, Money::from_minor(1250));

    let view = client.increase_quantity().await.unwrap();
    assert_eq!(view.quantity, 2);
    assert_eq!(view.total_price, Money::from_minor(2500));

    let view = client.decrease_quantity().await.unwrap();
    assert_eq!(view.quantity, 1);
    assert_eq!(view.total_price, Money::from_minor(1250));
}

#[tokio::test]
async fn test_quantity_floor_is_a_no_op_not_an_error() {
    let (actor, client) = item_screen::mount(burger());
    tokio::spawn(actor.run(()));
    let client = ItemClient::new(client);

    // Fresh screen starts at 1; decreasing stays at 1 with no price change
    let view = client.decrease_quantity().await.unwrap();
    assert_eq!(view.quantity, 1);
    assert_eq!(view.total_price, Money::from_minor(1000));
}

#[tokio::test]
async fn test_unknown_selection_is_ignored() {
    let (actor, client) = item_screen::mount(burger());
    tokio::spawn(actor.run(()));
    let client = ItemClient::new(client);

    // Unknown option in a known group
    let view = client.select_option("Size", "Gigantic").await.unwrap();
    assert!(view.selection.is_empty());
    assert_eq!(view.total_price, Money::from_minor(1000));

    // Unknown group entirely
    let view = client.select_option("Toppings", "Bacon").await.unwrap();
    assert!(view.selection.is_empty());
    assert_eq!(view.total_price, Money::from_minor(1000));
}

#[tokio::test]
async fn test_add_to_order_snapshots_the_configuration() {
    let (actor, client) = item_screen::mount(burger());
    tokio::spawn(actor.run(()));
    let client = ItemClient::new(client);

    client.select_option("Size", "Large").await.unwrap();
    client.increase_quantity().await.unwrap();
    let line = client.add_to_order().await.unwrap();

    assert_eq!(line.quantity().count(), 2);
    assert_eq!(line.total(), Money::from_minor(2500));
    assert_eq!(line.selection().chosen("Size"), Some("Large"));

    // The snapshot is a value: mutating the screen afterwards does not touch it
    client.increase_quantity().await.unwrap();
    assert_eq!(line.quantity().count(), 2);
    assert_eq!(line.total(), Money::from_minor(2500));
}

#[tokio::test]
async fn test_zero_priced_commit_returns_the_typed_error() {
    let (actor, client) = item_screen::mount(free_item());
    tokio::spawn(actor.run(()));
    let client = ItemClient::new(client);

    match client.add_to_order().await {
        Err(ItemScreenError::Order(OrderError::ZeroPriced(total))) => {
            assert_eq!(total, Money::ZERO);
        }
        other => panic!("Expected ZeroPriced, got {other:?}"),
    }
}
