use std::time::Duration;

use thiserror::Error;

/// Application-wide error types for Bookmarker.
///
/// Every variant's `Display` output is what ends up in a [`ParseError`]
/// message, so the wording is part of the user-facing surface.
///
/// [`ParseError`]: crate::models::ParseError
#[derive(Error, Debug)]
pub enum AppError {
    /// URL does not start with `http://` or `https://`.
    #[error("Invalid URL format")]
    InvalidUrlFormat,

    /// The server answered, but with a non-2xx status.
    #[error("{status} {} Error: {reason} for url: {url}", status_class(.status))]
    HttpStatus {
        status: u16,
        reason: String,
        url: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Any other HTTP transport failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Readable-content extraction failed.
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Stable snake_case tag for logs and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidUrlFormat => "invalid_url_format",
            AppError::HttpStatus { .. } => "http_status_error",
            AppError::Timeout(_) => "timeout",
            AppError::NetworkError(_) => "network_error",
            AppError::HttpError(_) => "transport_error",
            AppError::ExtractionError(_) => "extraction_error",
            AppError::ConfigError(_) => "config_error",
            AppError::SerializationError(_) => "serialization_error",
            AppError::Generic(_) => "error",
        }
    }

    /// Returns true if the error came from the network layer.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::HttpStatus { .. }
                | AppError::Timeout(_)
                | AppError::NetworkError(_)
                | AppError::HttpError(_)
        )
    }
}

fn status_class(status: &u16) -> &'static str {
    match status {
        400..=499 => "Client",
        500..=599 => "Server",
        _ => "HTTP",
    }
}
