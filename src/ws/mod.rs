//! WebSocket layer: upgrade handling and the per-connection loop.
//!
//! Every path other than the reserved HTTP routes upgrades to a WebSocket.
//! A connection gets one ping on accept and a `"pong"` text reply for every
//! data message it sends.

pub mod connection;
pub mod handler;
