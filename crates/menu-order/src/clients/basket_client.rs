//! # Basket Client
//!
//! Provides a high-level API for the basket screen: quantity adjustment and
//! reading the derived totals.

use crate::basket_screen::{BasketError, BasketEvent, BasketScreen, BasketView};
use async_trait::async_trait;
use screen_flow::{FlowClient, FlowError, ScreenClient};
use tracing::{debug, instrument};

/// Client for interacting with the basket screen.
#[derive(Clone)]
pub struct BasketClient {
    inner: ScreenClient<BasketScreen>,
}

impl BasketClient {
    pub fn new(inner: ScreenClient<BasketScreen>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FlowClient<BasketScreen> for BasketClient {
    type Error = BasketError;

    fn inner(&self) -> &ScreenClient<BasketScreen> {
        &self.inner
    }

    fn map_error(e: FlowError) -> Self::Error {
        BasketError::ScreenGone(e.to_string())
    }
}

impl BasketClient {
    /// Steps the quantity up by one and returns the recomputed totals.
    #[instrument(skip(self))]
    pub async fn increase_quantity(&self) -> Result<BasketView, BasketError> {
        debug!("Sending request");
        self.inner
            .dispatch(BasketEvent::IncreaseQuantity)
            .await
            .map_err(Self::map_error)
    }

    /// Steps the quantity down by one; a no-op at the floor of 1.
    #[instrument(skip(self))]
    pub async fn decrease_quantity(&self) -> Result<BasketView, BasketError> {
        debug!("Sending request");
        self.inner
            .dispatch(BasketEvent::DecreaseQuantity)
            .await
            .map_err(Self::map_error)
    }
}
