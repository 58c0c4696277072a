use axum::{
    extract::ws::rejection::WebSocketUpgradeRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::sync::mpsc;

/// A common error type that can be used throughout the App
#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Transport
    #[error("The connection is closed")]
    Closed,
    #[error(transparent)]
    Socket(#[from] axum::Error),

    // Upgrade
    #[error(transparent)]
    Upgrade(#[from] WebSocketUpgradeRejection),

    // 500 Internal Server Error
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Failed to send message to the room")]
    SendMessage,
}

// Convert mpsc send error to Error
impl<T> From<mpsc::error::SendError<T>> for Error {
    fn from(_: mpsc::error::SendError<T>) -> Self {
        Self::SendMessage
    }
}

impl Error {
    pub fn into_error(self) -> (StatusCode, String) {
        match self {
            Error::Upgrade(rejection) => {
                tracing::warn!("websocket upgrade rejected: {}", rejection);
                (rejection.status(), rejection.body_text())
            }
            _ => {
                tracing::error!("{}", self.to_string());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server internal error".into(),
                )
            }
        }
    }
}

// Axum allows you to return Error which impl IntoResponse
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_details() {
        let (status, body) = Error::SendMessage.into_error();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server internal error");
    }

    #[test]
    fn closed_reads_as_text() {
        assert_eq!(Error::Closed.to_string(), "The connection is closed");
    }
}
