//! Waitlist signup handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Waitlist routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/waitlist", post(handler::join_waitlist))
        .route("/api/waitlist/recent", get(handler::recent_entries))
}
