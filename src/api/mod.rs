//! Plain HTTP routes served next to the WebSocket endpoint.

pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the router for every non-WebSocket HTTP endpoint.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::system::routes())
}
