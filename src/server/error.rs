//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors returned by the HTTP handlers as plain-text responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing search query in URL params")]
    MissingQuery,

    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    #[error("encoding failure")]
    Encoding(#[from] serde_json::Error),

    #[error("search failed")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery | ApiError::InvalidLimit(_) => StatusCode::BAD_REQUEST,
            ApiError::Encoding(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingQuery.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidLimit("many".to_string()).status(),
            StatusCode::BAD_REQUEST
        );

        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = ApiError::from(json_err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "encoding failure");
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = ApiError::MissingQuery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }
}
