use dotenvy::dotenv;
use std::sync::Arc;
use storefront::{
    config::{database, storefront::load_default_config},
    errors::Result,
    web::{self, AppState},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal: env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Storefront settings
    let config = load_default_config()
        .inspect_err(|e| error!("Failed to load storefront configuration: {}", e))?;
    info!("Loaded storefront configuration for {}.", config.site_name);

    // 4. Catalog store
    let database_url = database::get_database_url();
    database::ensure_sqlite_directory(&database_url)?;
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 5. Serve until Ctrl+C
    web::serve(AppState::new(Arc::new(db), config)).await
}
