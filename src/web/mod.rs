//! HTTP layer - axum router, shared state and the server loop.
//!
//! Pages are JSON documents. Not-found rows render as 404 empty states
//! ([`views::Page`]); store failures render as 500 ([`crate::errors::Error`]).

pub mod advantages;
pub mod filter;
pub mod format;
pub mod icons;
pub mod loading;
pub mod pages;
pub mod views;
pub mod whatsapp;

use crate::{config::storefront::StorefrontConfig, errors::Result, web::loading::LoadingController};
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Catalog store
    pub database: Arc<DatabaseConnection>,
    /// Site settings loaded at startup
    pub config: Arc<StorefrontConfig>,
    /// Navigation progress broadcaster
    pub loading: LoadingController,
}

impl AppState {
    /// Bundles the startup resources with a fresh loading controller.
    #[must_use]
    pub fn new(database: Arc<DatabaseConnection>, config: StorefrontConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
            loading: LoadingController::new(),
        }
    }
}

/// Shows the progress indicator for the lifetime of a request.
async fn track_loading(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.loading.show(None);
    let response = next.run(request).await;
    state.loading.hide();
    response
}

async fn fallback() -> impl IntoResponse {
    views::Page::<()>::NotFound(views::EmptyState::new("Halaman tidak ditemukan"))
}

/// Builds the storefront router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home::show))
        .route("/categories", get(pages::categories::list))
        .route("/categories/{id}", get(pages::categories::get_by_id))
        .route(
            "/categories/{id}/sub-categories",
            get(pages::categories::list_sub_categories),
        )
        .route("/sub-categories/{id}", get(pages::categories::get_sub_category))
        .route("/products", get(pages::products::list))
        .route("/products/{id}", get(pages::products::get_by_id))
        .route("/products/{id}/images", get(pages::products::images))
        .route("/search", get(pages::search::show))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), track_loading))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(state: AppState) -> Result<()> {
    let bind_address = state.config.bind_address.clone();
    let _progress_log = state.loading.subscribe(|payload| {
        debug!(active = payload.active, "Loading state changed");
    });

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Storefront listening on {}", bind_address);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
