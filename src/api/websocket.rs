//! Handlers for websocket

use super::AppState;
use crate::core::Error;
use axum::extract::ws::{rejection::WebSocketUpgradeRejection, WebSocketUpgrade};
use axum::extract::State;
use axum::{response::IntoResponse, routing::get, Router};
use std::sync::Arc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/room", get(ws_handler))
}

/// A failed upgrade only fails this request
async fn ws_handler(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, Error> {
    let ws = ws?;
    let buffer_size = state.config.socket_buffer_size;
    let hub = state.hub.clone();

    let rsp = ws
        .read_buffer_size(buffer_size)
        .write_buffer_size(buffer_size)
        .on_failed_upgrade(|e| tracing::warn!("websocket handshake failed: {}", e))
        .on_upgrade(move |socket| async move { hub.handle_connection(socket).await });
    Ok(rsp)
}
