//! # pong-gateway
//!
//! Minimal WebSocket test server. Every accepted connection receives one
//! protocol ping; every text or binary message it sends is logged and
//! answered with the literal text `"pong"`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── /health (api/)
//!     ├── any other path → WS upgrade (ws/)
//!     │
//!     └── ConnectionStats (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod server;
pub mod telemetry;
pub mod ws;
