//! # Menu Client
//!
//! Provides a high-level API for the menu list screen. It wraps a
//! `ScreenClient<MenuScreen>` and exposes browsing and the item hand-off.

use crate::menu_screen::{MenuCommand, MenuScreen, MenuScreenError, MenuView};
use crate::model::MenuItem;
use async_trait::async_trait;
use screen_flow::{FlowClient, FlowError, ScreenClient};
use tracing::{debug, instrument};

/// Client for interacting with the menu screen.
#[derive(Clone)]
pub struct MenuClient {
    inner: ScreenClient<MenuScreen>,
}

impl MenuClient {
    pub fn new(inner: ScreenClient<MenuScreen>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl FlowClient<MenuScreen> for MenuClient {
    type Error = MenuScreenError;

    fn inner(&self) -> &ScreenClient<MenuScreen> {
        &self.inner
    }

    fn map_error(e: FlowError) -> Self::Error {
        MenuScreenError::ScreenGone(e.to_string())
    }
}

impl MenuClient {
    /// The current section list and loading flag.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<MenuView, MenuScreenError> {
        debug!("Sending request");
        self.view().await
    }

    /// Resolves a tapped item to its catalog value.
    ///
    /// Returns `None` when the section or item is unknown, which is also what
    /// every tap resolves to after a failed fetch left the menu empty.
    #[instrument(skip(self))]
    pub async fn select_item(
        &self,
        section: impl Into<String> + std::fmt::Debug,
        item: impl Into<String> + std::fmt::Debug,
    ) -> Result<Option<MenuItem>, MenuScreenError> {
        debug!("Sending request");
        self.inner
            .command(MenuCommand::SelectItem {
                section: section.into(),
                item: item.into(),
            })
            .await
            .map_err(Self::map_error)
    }
}
