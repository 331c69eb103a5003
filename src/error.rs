use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Cannot read form file {path}: {source}")]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("History file error: {0}")]
    HistoryIo(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code reported alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Transport(_) => "REQUEST_FAILED",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Resource { .. } => "RESOURCE_ERROR",
            AppError::HistoryIo(_) => "HISTORY_IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::Resource { .. } => StatusCode::BAD_REQUEST,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::HistoryIo(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Timeout(e.to_string())
        } else if e.is_builder() {
            AppError::InvalidRequest(e.to_string())
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": {
                "message": self.to_string(),
                "code": self.code(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_statuses() {
        let err = AppError::InvalidRequest("URL is empty".to_string());
        assert_eq!(err.code(), "INVALID_REQUEST");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid request: URL is empty");

        let err = AppError::Timeout("connect".to_string());
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);

        let err = AppError::Resource {
            path: "/missing.bin".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.code(), "RESOURCE_ERROR");
        assert!(err.to_string().contains("/missing.bin"));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::Transport("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
