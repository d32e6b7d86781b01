/// Database connection and table creation
pub mod database;

/// Storefront settings loaded from storefront.toml
pub mod storefront;
