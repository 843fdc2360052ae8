use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::response::json_response;

/// Error response type
///
/// Every error the service reports, whatever its status, has this shape.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The same payload as a JSON value, for handlers that return `JsonValue`
    pub fn into_value(self) -> JsonValue {
        serde_json::json!({ "error": self.error })
    }
}

/// Custom error type for API endpoints
///
/// Maps request-level failures to HTTP status codes and formats them as
/// JSON responses. Client input problems a handler can describe (a missing
/// field, an unknown id) are not errors here: they are ordinary 200 payloads.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered for this method and path
    NotFound,
    /// POST without `Content-Type: application/json`
    UnsupportedContentType,
    /// POST body is not valid JSON
    MalformedBody(serde_json::Error),
    /// Handler returned a failure
    HandlerFailed(anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnsupportedContentType => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) | ApiError::HandlerFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short message exposed to the caller; never a backtrace
    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound => "not found".to_string(),
            ApiError::UnsupportedContentType => "posted data must be in json format".to_string(),
            ApiError::MalformedBody(err) => err.to_string(),
            ApiError::HandlerFailed(err) => err.to_string(),
        }
    }

    pub fn into_parts(self) -> (StatusCode, JsonValue) {
        let status = self.status_code();
        (status, ErrorResponse::new(self.message()).into_value())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        json_response(status, &body)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::HandlerFailed(err)
    }
}
