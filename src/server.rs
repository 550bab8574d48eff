//! Router composition and the accept loop.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::error::ServerError;
use crate::ws::handler::ws_handler;

/// Builds the full application router.
///
/// `/health` is plain HTTP; every other path is a WebSocket endpoint.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .fallback(ws_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application on `listener` until `shutdown` resolves.
///
/// Each accepted connection runs on its own task; peer addresses are made
/// available to handlers through `ConnectInfo<SocketAddr>`.
///
/// # Errors
///
/// Returns [`ServerError::Io`] if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}
