use crate::basket_screen;
use crate::catalog::CatalogSource;
use crate::clients::{BasketClient, ItemClient, MenuClient};
use crate::item_screen;
use crate::menu_screen;
use crate::model::{MenuItem, OrderLine};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the menu → item detail → basket flow.
///
/// `OrderFlow` stands in for the navigation stack of the original UI. It is
/// responsible for:
/// - **Lifecycle Management**: mounting each screen's task and unmounting it on
///   navigation or shutdown
/// - **Dependency Wiring**: injecting the catalog source into the menu screen
/// - **Cancellation**: a screen replaced or shut down mid-load is aborted, so a
///   stale fetch response can never be applied to a screen that is gone
///
/// # Architecture
///
/// The flow consists of up to three live screens:
/// - **Menu Screen**: the fetched section list; mounted for the whole flow
/// - **Item Screen**: configuration of one selected item; replaced on every
///   `open_item`
/// - **Basket Screen**: quantity adjustment of one committed order line
///
/// # Example
///
/// ```ignore
/// let mut flow = OrderFlow::new(Arc::new(StaticCatalog::new(MENU_JSON)));
///
/// let item = flow.menu.select_item("Burgers", "Classic Burger").await?.unwrap();
/// let detail = flow.open_item(item).await;
/// detail.select_option("Size", "Large").await?;
/// let line = detail.add_to_order().await?;
/// let basket = flow.open_basket(line).await;
///
/// flow.shutdown().await?;
/// ```
pub struct OrderFlow {
    /// Client for the always-mounted menu screen
    pub menu: MenuClient,

    menu_task: JoinHandle<()>,
    item: Option<(ItemClient, JoinHandle<()>)>,
    basket: Option<(BasketClient, JoinHandle<()>)>,
}

impl OrderFlow {
    /// Mounts the menu screen and starts its one-shot catalog fetch.
    ///
    /// Requests sent through [`OrderFlow::menu`] while the fetch is in flight
    /// queue up and are answered once it settles.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (actor, client) = menu_screen::mount();
        let menu_task = tokio::spawn(actor.run(source));

        Self {
            menu: MenuClient::new(client),
            menu_task,
            item: None,
            basket: None,
        }
    }

    /// Navigates to the item-detail screen for `item`.
    ///
    /// The item crosses the boundary as a value; any previously open detail
    /// screen is unmounted first (replace navigation).
    pub async fn open_item(&mut self, item: MenuItem) -> ItemClient {
        if let Some((client, task)) = self.item.take() {
            info!("Replacing item detail screen");
            drop(client);
            unmount(task).await;
        }

        let (actor, client) = item_screen::mount(item);
        let task = tokio::spawn(actor.run(()));
        let client = ItemClient::new(client);
        self.item = Some((client.clone(), task));
        client
    }

    /// Navigates to the basket with a committed order line.
    ///
    /// The detail screen is unmounted; the basket owns its own copy of the
    /// quantity from here on and never observes the originating selection
    /// state again.
    pub async fn open_basket(&mut self, line: OrderLine) -> BasketClient {
        if let Some((client, task)) = self.item.take() {
            drop(client);
            unmount(task).await;
        }
        if let Some((client, task)) = self.basket.take() {
            info!("Replacing basket screen");
            drop(client);
            unmount(task).await;
        }

        let (actor, client) = basket_screen::mount(line);
        let task = tokio::spawn(actor.run(()));
        let client = BasketClient::new(client);
        self.basket = Some((client.clone(), task));
        client
    }

    /// Unmounts every screen, newest first.
    ///
    /// A menu fetch still in flight is cancelled outright. Returns an error
    /// only if a screen task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Closing order flow...");

        if let Some((client, task)) = self.basket {
            drop(client);
            unmount(task).await;
        }
        if let Some((client, task)) = self.item {
            drop(client);
            unmount(task).await;
        }

        drop(self.menu);
        self.menu_task.abort();
        match self.menu_task.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                error!("Screen task failed: {e:?}");
                return Err(format!("Screen task failed: {e:?}"));
            }
        }

        info!("Order flow closed.");
        Ok(())
    }
}

/// Aborts a screen task and waits it out. Cancellation is the expected
/// outcome; a panic is logged and swallowed; navigation must not fail because
/// the screen being left behind died badly.
async fn unmount(task: JoinHandle<()>) {
    task.abort();
    match task.await {
        Ok(()) => {}
        Err(e) if e.is_cancelled() => {}
        Err(e) => error!("Unmounted screen task failed: {e:?}"),
    }
}
