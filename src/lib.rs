// Link dashboard - panels of categories of links behind a small JSON API
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::presentation::app_state::AppState;
use crate::presentation::handlers;

/// Build the HTTP router.
///
/// The `/reorder` paths are static segments, so they always win over the
/// `:id` routes next to them.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/healthz", get(handlers::health_check))
        .route(
            "/api/panels",
            get(handlers::list_panels).post(handlers::create_panel),
        )
        .route("/api/panels/:id", delete(handlers::delete_panel))
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/api/categories/reorder", put(handlers::reorder_categories))
        .route("/api/categories/:id", delete(handlers::delete_category))
        .route("/api/links", post(handlers::create_link))
        .route("/api/links/reorder", put(handlers::reorder_links))
        .route(
            "/api/links/:id",
            put(handlers::update_link).delete(handlers::delete_link),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
