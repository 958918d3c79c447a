//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod extract;
pub mod health;
pub mod waitlist;

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

use crate::{
    constants::MAX_REQUEST_BODY_BYTES, middleware::logging_middleware, state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(waitlist::routes())
}

/// Build the complete application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(CompressionLayer::new())
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
