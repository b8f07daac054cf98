use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::ErrorResponse;

/// Request rejections, each mapped to a status code and a JSON error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// `Content-Type` was missing or not `application/json`
    UnsupportedMediaType,
    /// Body could not be decoded into the expected request
    InvalidBody(String),
    /// `/word/` was given more than one word
    NotASingleWord,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidBody(_) | ApiError::NotASingleWord => StatusCode::BAD_REQUEST,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::UnsupportedMediaType => write!(f, "Content Type is not application/json"),
            ApiError::InvalidBody(msg) => write!(f, "Could not decode body: {}", msg),
            ApiError::NotASingleWord => {
                write!(f, "Error, '/word/' must be provided with a single word")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Rejecting request ({}): {}", status, self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
