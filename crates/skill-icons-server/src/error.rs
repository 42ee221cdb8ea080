//! Error types for the HTTP server.

use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use skill_icons_core::{CoreError, RequestError};

use crate::logging::targets;

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors raised while starting the server or handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys.
    #[error("Invalid config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Bind address is not an IP address.
    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),

    /// Catalogue or alias table failed to load.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request parameters were rejected.
    #[error(transparent)]
    BadRequest(#[from] RequestError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid header value.
    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// Socket or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A request handler task failed.
    #[error("Request handler failed: {0}")]
    Handler(String),
}

impl ServerError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(err) => {
                tracing::debug!(target: targets::HTTP, "Rejected request: {err}");
                err.to_string()
            }
            other => {
                tracing::error!(target: targets::HTTP, "Internal error: {other}");
                "Internal Server Error".to_string()
            }
        };
        (status, [(CONTENT_TYPE, "text/plain;charset=UTF-8")], body).into_response()
    }
}
