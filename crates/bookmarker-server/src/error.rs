use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bookmarker_core::ParseError;

use crate::dto::{ErrorResponse, ParseErrorResponse};

/// Errors returned by the JSON API.
pub enum ApiError {
    /// The pipeline failed; rendered as `{error}` with 400.
    Parse(ParseError),
    /// Unknown article id.
    NotFound(String),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Parse(err) => (
                StatusCode::BAD_REQUEST,
                axum::Json(ParseErrorResponse::from(err)),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                let body = ErrorResponse {
                    error: "not_found".to_string(),
                    message,
                };
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
        }
    }
}
