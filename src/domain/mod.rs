//! Domain layer: the reply contract and shared connection counters.

pub mod connection_stats;
pub mod inbound;

pub use connection_stats::{ConnectionGuard, ConnectionStats, StatsSnapshot};
pub use inbound::{InboundPayload, PONG_REPLY};
