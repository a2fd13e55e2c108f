// src/main.rs
use betsy_backend::{catalog, seed, Store};
use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://betsy.db?mode=rwc".to_string());
    let store = Store::connect(&database_url)
        .await
        .expect("Failed to open the catalog database");
    store
        .init_schema()
        .await
        .expect("Failed to create the schema");

    // Seed the fixture catalog on first run
    let products = store
        .all_products()
        .await
        .expect("Failed to read the catalog");
    if products.is_empty() {
        seed::populate(&store)
            .await
            .expect("Failed to seed the catalog");
        tracing::info!("Seeded the fixture catalog");
    }

    match catalog::search(&store, "painted shoes").await {
        Ok(hits) => {
            for hit in &hits {
                tracing::info!(rank = hit.rank, "{hit}");
            }
            match serde_json::to_string(&hits) {
                Ok(json) => tracing::debug!(%json, "search results"),
                Err(e) => tracing::error!(error = %e, "Failed to serialize search results"),
            }
        }
        Err(e) => tracing::error!(error = %e, "Search failed"),
    }

    match catalog::list_user_products(&store, 3).await {
        Ok(names) => tracing::info!(?names, "Products for user 3"),
        Err(e) => tracing::info!("{e}"),
    }

    match catalog::list_products_per_tag(&store, 2).await {
        Ok(names) => tracing::info!(?names, "Products for tag 2"),
        Err(e) => tracing::info!("{e}"),
    }

    match catalog::purchase_product(&store, 2, 3, 1).await {
        Ok(transaction) => tracing::info!(
            transaction_id = transaction.id,
            price_in_cents = transaction.price_in_cents,
            "Purchase recorded"
        ),
        Err(e) => tracing::error!(error = %e, "Purchase failed"),
    }
}
