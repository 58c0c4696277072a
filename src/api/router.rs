//! Defines the router of the server.

use super::{websocket, AppState};
use crate::Config;
use axum::Router;
use tower_http::{services::ServeFile, trace::TraceLayer};

/// Create router of the application.
///
/// - `config`: The global configure of the application.
pub async fn make_app(config: Config) -> Router {
    let page = ServeFile::new(&config.template_file);
    let state = AppState::new(config);

    Router::new()
        .route_service("/", page)
        .merge(websocket::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
