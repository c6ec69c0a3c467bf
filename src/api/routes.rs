//! API routes configuration module

use crate::api::errors::unknown_endpoint;
use crate::api::handlers::{
    create_person, delete_person, get_info, get_person, list_persons, update_person,
};
use crate::api::logging::log_request;
use crate::db::SharedStore;
use axum::{middleware, routing::get, Extension, Router};
use tower_http::cors::CorsLayer;

/// Creates and configures the API router with all routes
///
/// Unsupported methods on a known path fall through to the same
/// unknown-endpoint response as unknown paths. Cross-origin requests from any
/// origin are allowed, preflights included.
///
/// # Arguments
/// * `store` - Person store to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/info", get(get_info).fallback(unknown_endpoint))
        .route(
            "/api/persons",
            get(list_persons)
                .post(create_person)
                .fallback(unknown_endpoint),
        )
        .route(
            "/api/persons/:id",
            get(get_person)
                .put(update_person)
                .delete(delete_person)
                .fallback(unknown_endpoint),
        )
        .fallback(unknown_endpoint)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .layer(Extension(store))
}
