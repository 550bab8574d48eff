//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;
use crate::domain::StatsSnapshot;

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    connections: StatsSnapshot,
}

/// `GET /health` — Service health status and connection counters.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            connections: state.stats.snapshot(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_reports_counters() {
        let state = AppState::new(1024);
        let guard = state.stats.open();
        guard.stats().record_message();
        guard.stats().record_reply();

        let app = routes().with_state(state);
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap_or_default();
        let Ok(response) = app.oneshot(request).await else {
            panic!("router is infallible");
        };
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("failed to read body");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&body) else {
            panic!("health body is not JSON");
        };
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["connections"]["active"], 1);
        assert_eq!(json["connections"]["accepted"], 1);
        assert_eq!(json["connections"]["messages_received"], 1);
        assert_eq!(json["connections"]["replies_sent"], 1);
        drop(guard);
    }
}
