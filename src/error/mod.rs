// Error types for the langbridge gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Invalid translation direction")]
    InvalidDirection(String),

    #[error("Forbidden: requests from this host are not allowed")]
    Forbidden(Option<std::net::IpAddr>),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Direction registered more than once: {0}")]
    DuplicateDirection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// HTTP status this error is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            BridgeError::InvalidDirection(_) => StatusCode::BAD_REQUEST,
            BridgeError::Forbidden(_) => StatusCode::FORBIDDEN,
            BridgeError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert BridgeError to HTTP responses for Axum
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures are logged in full but never echoed to the caller
        let detail = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
