//! Axum WebSocket upgrade handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /*` — Upgrade HTTP connection to WebSocket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let stats = Arc::clone(&state.stats);

    ws.max_message_size(state.max_message_size)
        .on_failed_upgrade(move |error: axum::Error| {
            tracing::error!(%peer, %error, "websocket upgrade failed");
        })
        .on_upgrade(move |socket| run_connection(socket, peer, stats))
}
