//! Per-connection read/reply loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::ws::{Message, WebSocket};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tracing::Instrument;

use crate::domain::{ConnectionStats, InboundPayload, PONG_REPLY};

/// Runs a single WebSocket connection until the client goes away.
///
/// - Sends one ping frame before anything else.
/// - Answers every text or binary message with `"pong"` and logs the payload.
/// - Logs transport errors and stops; nothing is sent after close or error.
pub async fn run_connection(socket: WebSocket, peer: SocketAddr, stats: Arc<ConnectionStats>) {
    let connection_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("ws", %connection_id, %peer);
    serve_socket(socket, stats).instrument(span).await;
}

/// Drives the ping/reply protocol over any WebSocket-shaped stream.
///
/// Split out from [`run_connection`] so the loop does not depend on a live
/// HTTP upgrade.
pub async fn serve_socket<S>(mut socket: S, stats: Arc<ConnectionStats>)
where
    S: Stream<Item = Result<Message, axum::Error>> + Sink<Message, Error = axum::Error> + Unpin,
{
    let guard = stats.open();
    tracing::info!("connection accepted");

    if let Err(error) = socket.send(Message::Ping(Bytes::new())).await {
        tracing::error!(%error, "failed to send initial ping");
        return;
    }

    while let Some(frame) = socket.next().await {
        let msg = match frame {
            Ok(msg) => msg,
            Err(error) => {
                tracing::error!(%error, "websocket error");
                break;
            }
        };

        if let Some(payload) = InboundPayload::from_message(&msg) {
            guard.stats().record_message();

            let sent = socket.send(Message::text(PONG_REPLY)).await;
            tracing::info!(kind = payload.kind(), len = payload.len(), "received: {payload}");

            if let Err(error) = sent {
                tracing::error!(%error, "failed to send reply");
                break;
            }
            guard.stats().record_reply();
            continue;
        }

        match msg {
            Message::Close(frame) => {
                tracing::debug!(?frame, "close frame received");
                break;
            }
            Message::Pong(_) => tracing::debug!("pong frame received"),
            // axum queues the pong reply to pings on its own
            _ => {}
        }
    }

    tracing::info!("connection closed");
}
