//! Storefront bootstrap binary.
//!
//! Initializes logging, connects to the database, creates any missing
//! tables, seeds the category tree from config.toml, and logs a summary
//! of the catalog. The HTTP presentation layer lives outside this crate.

use dotenvy::dotenv;
use storefront::{
    config,
    core::{catalog, category},
    errors::Result,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing as early as possible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load .env; non-fatal, env vars can be set externally
    dotenv().ok();

    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized at {}", config::database::get_database_url());

    match config::catalog::load_default_config() {
        Ok(cfg) => {
            let created = category::seed_catalog(&db, &cfg.categories).await?;
            info!(created, "catalog seeding complete");
        }
        Err(e) => warn!("Skipping catalog seeding: {e}"),
    }

    let tree = category::catalog_tree(&db).await?;
    for node in &tree {
        info!(
            category = %node.category.name,
            kind = %node.category.product_kind,
            subcategories = node.subcategories.len(),
            "catalog entry"
        );
    }

    let latest = catalog::home_listing(&db).await?;
    info!(
        categories = tree.len(),
        latest_items = latest.len(),
        "storefront ready"
    );

    Ok(())
}
