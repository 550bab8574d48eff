//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::ConnectionStats;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Counters shared by every WebSocket connection.
    pub stats: Arc<ConnectionStats>,
    /// Largest inbound WebSocket message accepted, in bytes.
    pub max_message_size: usize,
}

impl AppState {
    /// Creates fresh state with zeroed counters.
    #[must_use]
    pub fn new(max_message_size: usize) -> Self {
        Self {
            stats: Arc::new(ConnectionStats::new()),
            max_message_size,
        }
    }
}
