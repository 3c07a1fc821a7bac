//! Demo walk of the full flow: browse the menu, configure an item, commit it,
//! and adjust the basket.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use menu_order::catalog::StaticCatalog;
use menu_order::lifecycle::OrderFlow;
use screen_flow::tracing::setup_tracing;
use std::sync::Arc;
use tracing::{error, info, Instrument};

const MENU_JSON: &str = include_str!("../demo/menu.json");

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting menu order flow");

    // Mount the menu screen; the catalog fetch starts immediately
    let mut flow = OrderFlow::new(Arc::new(StaticCatalog::new(MENU_JSON)));

    let menu = flow.menu.menu().await.map_err(|e| e.to_string())?;
    info!(sections = menu.sections.len(), "Menu loaded");

    // Pick the item to configure
    let span = tracing::info_span!("item_selection");
    let item = async {
        info!("Selecting item from menu");
        flow.menu
            .select_item("Burgers", "Classic Burger")
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?
    .ok_or_else(|| "Classic Burger not on the menu".to_string())?;

    info!(item = %item.name, price = %item.price, "Item selected");

    // Configure it: large, with bacon, three of them
    let detail = flow.open_item(item).await;

    let span = tracing::info_span!("order_building");
    let line = async {
        detail
            .select_option("Size", "Large")
            .await
            .map_err(|e| e.to_string())?;
        detail
            .select_option("Extras", "Bacon")
            .await
            .map_err(|e| e.to_string())?;
        detail
            .increase_quantity()
            .await
            .map_err(|e| e.to_string())?;
        let view = detail
            .increase_quantity()
            .await
            .map_err(|e| e.to_string())?;
        info!(quantity = view.quantity, total = %view.total_price, "Configuration ready");

        detail.add_to_order().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(total = %line.total(), "Order line committed");

    // Basket: one more, then one less
    let basket = flow.open_basket(line).await;

    let span = tracing::info_span!("basket");
    let result = async {
        basket.increase_quantity().await?;
        basket.decrease_quantity().await
    }
    .instrument(span)
    .await;

    match result {
        Ok(view) => {
            info!(
                item = %view.item_name,
                quantity = view.quantity,
                subtotal = %view.subtotal,
                total = %view.total,
                "Basket totals"
            );
        }
        Err(e) => {
            error!(error = %e, "Basket update failed")
        }
    }

    // Shutdown the flow gracefully
    flow.shutdown().await?;

    info!("Flow completed successfully");
    Ok(())
}
