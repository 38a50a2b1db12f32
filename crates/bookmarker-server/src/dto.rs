use serde::{Deserialize, Serialize};

use bookmarker_core::{ArticleResult, ParseError};

use crate::store::StoredArticle;

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Body of `POST /save` (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Parse
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ParseRequest {
    /// Article URL (http or https)
    pub url: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticleResponse {
    pub title: String,
    /// Sanitized content
    pub content: String,
    pub url: String,
}

impl From<ArticleResult> for ArticleResponse {
    fn from(article: ArticleResult) -> Self {
        Self {
            title: article.title,
            content: article.content,
            url: article.url,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ParseErrorResponse {
    /// Human-readable description of the failed step
    pub error: String,
}

impl From<ParseError> for ParseErrorResponse {
    fn from(err: ParseError) -> Self {
        Self { error: err.error }
    }
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<StoredArticle>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub articles: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
