//! # Menu Screen
//!
//! The root screen: a list of menu sections fetched once from the catalog
//! endpoint, from which the user picks the item to configure.
//!
//! ## Fetch Semantics
//!
//! The fetch runs in [`Screen::on_mount`] and is the screen's only suspending
//! operation. Its two terminal outcomes are:
//!
//! - **success**: sections populated, loading cleared;
//! - **failure**: error logged (`error!`), loading cleared, empty section
//!   list left standing. Nothing is surfaced to the user.
//!
//! Requests arriving while the fetch is in flight queue up and are answered
//! afterwards, so a caller never observes `loading == true` together with a
//! populated list. Unmounting the screen mid-fetch aborts the task and with it
//! the fetch; the stale response has nowhere to land.
//!
//! ## Hand-off
//!
//! [`MenuCommand::SelectItem`] answers with a cloned [`MenuItem`] value; that
//! clone is what the item-detail screen is mounted with. The menu keeps no
//! reference to it afterwards.

pub mod error;

pub use error::*;

use crate::catalog::CatalogSource;
use crate::model::{MenuItem, MenuSection};
use async_trait::async_trait;
use screen_flow::{Screen, ScreenActor, ScreenClient};
use std::sync::Arc;
use tracing::error;

/// State of the menu list screen.
#[derive(Debug)]
pub struct MenuScreen {
    sections: Vec<MenuSection>,
    loading: bool,
}

/// User interactions on the menu screen.
///
/// Browsing is read-only; there is nothing to mutate, so the enum is empty.
#[derive(Debug)]
pub enum MenuEvent {}

/// Request/response operations on the menu screen.
#[derive(Debug)]
pub enum MenuCommand {
    /// Resolve a tapped item to its catalog value, by section and item name.
    SelectItem { section: String, item: String },
}

/// Immutable snapshot of the menu state.
#[derive(Debug, Clone)]
pub struct MenuView {
    pub sections: Vec<MenuSection>,
    pub loading: bool,
}

#[async_trait]
impl Screen for MenuScreen {
    type Params = ();
    type Event = MenuEvent;
    type Command = MenuCommand;
    type Outcome = Option<MenuItem>;
    type View = MenuView;
    type Context = Arc<dyn CatalogSource>;
    type Error = MenuScreenError;

    fn mount(_params: ()) -> Self {
        Self {
            sections: Vec::new(),
            loading: true,
        }
    }

    /// The one-shot catalog fetch.
    async fn on_mount(&mut self, source: &Arc<dyn CatalogSource>) -> Result<(), MenuScreenError> {
        match source.fetch().await {
            Ok(document) => {
                self.sections = document.sections;
            }
            Err(e) => {
                // Logged only; the user sees an empty menu, not an error
                error!(error = %e, "Catalog fetch failed");
            }
        }
        self.loading = false;
        Ok(())
    }

    async fn on_event(
        &mut self,
        event: MenuEvent,
        _ctx: &Arc<dyn CatalogSource>,
    ) -> Result<(), MenuScreenError> {
        match event {}
    }

    async fn on_command(
        &mut self,
        command: MenuCommand,
        _ctx: &Arc<dyn CatalogSource>,
    ) -> Result<Option<MenuItem>, MenuScreenError> {
        match command {
            MenuCommand::SelectItem { section, item } => Ok(self
                .sections
                .iter()
                .find(|s| s.name == section)
                .and_then(|s| s.items.iter().find(|i| i.name == item))
                .cloned()),
        }
    }

    fn view(&self) -> MenuView {
        MenuView {
            sections: self.sections.clone(),
            loading: self.loading,
        }
    }
}

/// Mounts the menu screen and returns the actor and its generic client.
pub fn mount() -> (ScreenActor<MenuScreen>, ScreenClient<MenuScreen>) {
    ScreenActor::mount((), 32)
}
