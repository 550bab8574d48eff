//! Process-wide connection counters.
//!
//! [`ConnectionStats`] is shared by every connection task. Counters are
//! plain atomics: connections never coordinate with each other, so the
//! only requirement is that increments are not lost.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Shared counters for all WebSocket connections.
#[derive(Debug, Default)]
pub struct ConnectionStats {
    active: AtomicU64,
    accepted: AtomicU64,
    messages_received: AtomicU64,
    replies_sent: AtomicU64,
}

/// Point-in-time copy of [`ConnectionStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Connections currently open.
    pub active: u64,
    /// Connections accepted since startup.
    pub accepted: u64,
    /// Data messages received since startup.
    pub messages_received: u64,
    /// `"pong"` replies successfully sent since startup.
    pub replies_sent: u64,
}

impl ConnectionStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a newly accepted connection.
    ///
    /// The returned guard keeps the connection counted as active until it
    /// is dropped.
    #[must_use]
    pub fn open(self: &Arc<Self>) -> ConnectionGuard {
        self.accepted.fetch_add(1, Ordering::Relaxed);
        self.active.fetch_add(1, Ordering::Relaxed);
        ConnectionGuard {
            stats: Arc::clone(self),
        }
    }

    /// Records one inbound data message.
    pub fn record_message(&self) {
        self.messages_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one reply written to a client.
    pub fn record_reply(&self) {
        self.replies_sent.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the current counter values.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            active: self.active.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            messages_received: self.messages_received.load(Ordering::Relaxed),
            replies_sent: self.replies_sent.load(Ordering::Relaxed),
        }
    }
}

/// Marks one connection as active for as long as it lives.
#[derive(Debug)]
pub struct ConnectionGuard {
    stats: Arc<ConnectionStats>,
}

impl ConnectionGuard {
    /// Shared counters this guard belongs to.
    #[must_use]
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.stats.active.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let stats = ConnectionStats::new();
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                active: 0,
                accepted: 0,
                messages_received: 0,
                replies_sent: 0,
            }
        );
    }

    #[test]
    fn guard_tracks_active_connections() {
        let stats = Arc::new(ConnectionStats::new());
        let first = stats.open();
        let second = stats.open();
        assert_eq!(stats.snapshot().active, 2);
        assert_eq!(stats.snapshot().accepted, 2);

        drop(first);
        assert_eq!(stats.snapshot().active, 1);

        drop(second);
        let snap = stats.snapshot();
        assert_eq!(snap.active, 0);
        assert_eq!(snap.accepted, 2);
    }

    #[test]
    fn message_and_reply_counters() {
        let stats = Arc::new(ConnectionStats::new());
        let guard = stats.open();
        guard.stats().record_message();
        guard.stats().record_message();
        guard.stats().record_reply();

        let snap = stats.snapshot();
        assert_eq!(snap.messages_received, 2);
        assert_eq!(snap.replies_sent, 1);
    }

    #[test]
    fn snapshot_serializes_flat() {
        let stats = ConnectionStats::new();
        stats.record_message();
        let json = serde_json::to_value(stats.snapshot()).unwrap_or_default();
        assert_eq!(json["messages_received"], 1);
        assert_eq!(json["active"], 0);
    }

    #[tokio::test]
    async fn concurrent_guards_do_not_lose_updates() {
        let stats = Arc::new(ConnectionStats::new());
        let mut tasks = Vec::new();
        for _ in 0..32 {
            let stats = Arc::clone(&stats);
            tasks.push(tokio::spawn(async move {
                let guard = stats.open();
                guard.stats().record_message();
                tokio::task::yield_now().await;
            }));
        }
        for task in tasks {
            assert!(task.await.is_ok());
        }

        let snap = stats.snapshot();
        assert_eq!(snap.accepted, 32);
        assert_eq!(snap.messages_received, 32);
        assert_eq!(snap.active, 0);
    }
}
