//! Server Errors
//!
//! Every forwarding failure becomes a JSON body `{"error": "..."}`. Details go
//! to the log; the browser only sees a short message it can show in an alert.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("Webhook URL not configured for {0}")]
    NotConfigured(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Webhook responded with status {0}")]
    Rejected(u16),
}

pub type ForwardResult<T> = Result<T, ForwardError>;

impl ForwardError {
    /// Webhook error statuses pass through; anything else is a 500
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardError::Rejected(code) => StatusCode::from_u16(*code)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ForwardError::NotConfigured(_) => "Webhook URL not configured",
            ForwardError::Rejected(_) => "Failed to forward submission",
            ForwardError::Json(_) | ForwardError::Network(_) => "Failed to submit request",
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match &self {
            ForwardError::NotConfigured(kind) => {
                tracing::error!("No webhook URL configured for {}", kind)
            }
            ForwardError::Json(e) => tracing::warn!("Unreadable submission: {}", e),
            ForwardError::Network(e) => tracing::error!("Webhook unreachable: {:?}", e),
            ForwardError::Rejected(code) => tracing::warn!("Webhook rejected submission: {}", code),
        }

        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

/// Startup configuration problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_status_passes_through() {
        assert_eq!(ForwardError::Rejected(404).status(), StatusCode::NOT_FOUND);
        assert_eq!(ForwardError::Rejected(502).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_non_error_status_maps_to_500() {
        assert_eq!(ForwardError::Rejected(302).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ForwardError::Rejected(99).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_configured_is_500() {
        let err = ForwardError::NotConfigured("Price Change");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Webhook URL not configured");
    }
}
