//! # Item Client
//!
//! Provides a high-level API for the item-detail screen: modifier selection,
//! quantity stepping, and the add-to-order commit.

use crate::item_screen::{ItemCommand, ItemEvent, ItemScreen, ItemScreenError, ItemView};
use crate::model::OrderLine;
use async_trait::async_trait;
use screen_flow::{FlowClient, FlowError, ScreenClient};
use tracing::{debug, instrument};

/// Client for interacting with the item-detail screen.
#[derive(Clone)]
pub struct ItemClient {
    inner: ScreenClient<ItemScreen>,
}

impl ItemClient {
    pub fn new(inner: ScreenClient<ItemScreen>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FlowClient<ItemScreen> for ItemClient {
    type Error = ItemScreenError;

    fn inner(&self) -> &ScreenClient<ItemScreen> {
        &self.inner
    }

    /// Unboxes the screen's own error type where possible so callers can match
    /// on `Order(ZeroPriced)` directly; anything else is a communication loss.
    fn map_error(e: FlowError) -> Self::Error {
        match e {
            FlowError::ScreenError(inner) => match inner.downcast::<ItemScreenError>() {
                Ok(err) => *err,
                Err(other) => ItemScreenError::ScreenGone(other.to_string()),
            },
            other => ItemScreenError::ScreenGone(other.to_string()),
        }
    }
}

impl ItemClient {
    /// Selects an option in a modifier group, replacing any prior pick in that
    /// group. Returns the refreshed view with the updated live price.
    #[instrument(skip(self))]
    pub async fn select_option(
        &self,
        group: impl Into<String> + std::fmt::Debug,
        option: impl Into<String> + std::fmt::Debug,
    ) -> Result<ItemView, ItemScreenError> {
        debug!("Sending request");
        self.inner
            .dispatch(ItemEvent::SelectOption {
                group: group.into(),
                option: option.into(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Steps the quantity up by one.
    #[instrument(skip(self))]
    pub async fn increase_quantity(&self) -> Result<ItemView, ItemScreenError> {
        debug!("Sending request");
        self.inner
            .dispatch(ItemEvent::IncreaseQuantity)
            .await
            .map_err(Self::map_error)
    }

    /// Steps the quantity down by one; a no-op at the floor of 1.
    #[instrument(skip(self))]
    pub async fn decrease_quantity(&self) -> Result<ItemView, ItemScreenError> {
        debug!("Sending request");
        self.inner
            .dispatch(ItemEvent::DecreaseQuantity)
            .await
            .map_err(Self::map_error)
    }

    /// Commits the current configuration as an immutable [`OrderLine`].
    #[instrument(skip(self))]
    pub async fn add_to_order(&self) -> Result<OrderLine, ItemScreenError> {
        debug!("Sending request");
        self.inner
            .command(ItemCommand::AddToOrder)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, Money, OrderError, Quantity, SelectionState};
    use screen_flow::mock::{create_mock_client, expect_command, expect_event};

    fn cola() -> MenuItem {
        MenuItem {
            name: "Cola".into(),
            price: Money::from_minor(350),
            description: None,
            images: None,
            modifiers: vec![],
        }
    }

    #[tokio::test]
    async fn test_select_option_sends_the_right_event() {
        let (client, mut receiver) = create_mock_client::<ItemScreen>(10);
        let item_client = ItemClient::new(client);

        let select_task =
            tokio::spawn(async move { item_client.select_option("Size", "Large").await });

        let (event, responder) = expect_event(&mut receiver)
            .await
            .expect("Expected Event request");
        match event {
            ItemEvent::SelectOption { group, option } => {
                assert_eq!(group, "Size");
                assert_eq!(option, "Large");
            }
            other => panic!("Expected SelectOption, got {other:?}"),
        }

        let mut selection = SelectionState::new();
        selection.select("Size", "Large");
        responder
            .send(Ok(ItemView {
                item_name: "Cola".into(),
                selection,
                quantity: 1,
                unit_price: Money::from_minor(350),
                total_price: Money::from_minor(350),
            }))
            .unwrap();

        let view = select_task.await.unwrap().unwrap();
        assert_eq!(view.selection.chosen("Size"), Some("Large"));
    }

    #[tokio::test]
    async fn test_add_to_order_returns_the_snapshot() {
        let (client, mut receiver) = create_mock_client::<ItemScreen>(10);
        let item_client = ItemClient::new(client);

        let commit_task = tokio::spawn(async move { item_client.add_to_order().await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, ItemCommand::AddToOrder));

        let line =
            OrderLine::compose(cola(), SelectionState::new(), Quantity::new(2)).unwrap();
        responder.send(Ok(line)).unwrap();

        let line = commit_task.await.unwrap().unwrap();
        assert_eq!(line.total(), Money::from_minor(700));
    }

    #[tokio::test]
    async fn test_zero_priced_error_survives_the_channel() {
        let (client, mut receiver) = create_mock_client::<ItemScreen>(10);
        let item_client = ItemClient::new(client);

        let commit_task = tokio::spawn(async move { item_client.add_to_order().await });

        let (_, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        responder
            .send(Err(screen_flow::FlowError::ScreenError(Box::new(
                ItemScreenError::Order(OrderError::ZeroPriced(Money::ZERO)),
            ))))
            .unwrap();

        // map_error downcasts the boxed screen error back to its real type
        let result = commit_task.await.unwrap();
        match result {
            Err(ItemScreenError::Order(OrderError::ZeroPriced(total))) => {
                assert_eq!(total, Money::ZERO);
            }
            other => panic!("Expected ZeroPriced, got {other:?}"),
        }
    }
}
