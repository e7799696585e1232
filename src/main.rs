use tracing::{error, info, warn, Instrument};

use cart_buddy::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem, CATALOG_PATH_VAR};
use cart_buddy::catalog::Catalog;
use cart_buddy::deferred::DisplayOutcome;
use cart_buddy::discount::{format_price, original_price};

fn load_catalog() -> Result<Catalog, String> {
    let catalog = match std::env::var(CATALOG_PATH_VAR) {
        Ok(path) => {
            info!(%path, "Loading catalog from file");
            Catalog::load(&path)
        }
        Err(_) => Catalog::builtin(),
    };
    catalog.map_err(|e| {
        error!(error = %e, "Refusing to start: invalid catalog");
        e.to_string()
    })
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront");

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let catalog = load_catalog()?;
    let system = StorefrontSystem::new(config, catalog);
    let client = system.client.clone();

    for deal in client.deals() {
        if let Some(original) = original_price(deal) {
            info!(
                deal = %deal.name,
                was = %format_price(original),
                now = %format_price(deal.price),
                "Deal"
            );
        }
    }

    let listing = client.listing("");
    info!(count = listing.len(), "All products");

    let session = client.open_session("demo").await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("shopping", session_id = %session);
    async {
        for product in &listing {
            if product.in_stock {
                client.add_to_cart(&session, &product.id).await?;
            } else {
                let alternates = client.find_alternates(&session, &product.id).await?;
                warn!(product = %product.name, alternates = alternates.len(), "Out of stock");
                if let Some(first) = alternates.first() {
                    client.add_to_cart(&session, &first.id).await?;
                }
                client.close_selection(&session).await?;
            }
        }
        client.increment(&session, "4").await?;

        let total = client.total(&session).await?;
        let items = client.item_count(&session).await?;
        info!(items, total = %format_price(total), "Cart ready");
        Ok::<(), cart_buddy::app_system::StorefrontError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let route = system.route_display();
    match route.wait().await {
        DisplayOutcome::Shown => info!("Route displayed"),
        DisplayOutcome::Cancelled => warn!("Route display cancelled"),
    }

    client.delete_session(session).await.map_err(|e| e.to_string())?;
    drop(client);
    system.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}
