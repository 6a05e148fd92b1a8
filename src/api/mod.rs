//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::collection::CollectionManager;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper wrapping a manager into state
pub fn create_router_with_manager(manager: Arc<CollectionManager>) -> Router {
    create_router(AppState::new(manager))
}
