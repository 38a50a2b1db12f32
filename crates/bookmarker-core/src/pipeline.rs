use std::any::Any;

use tokio::task::JoinError;

use crate::error::AppError;
use crate::models::{ArticleResult, PipelineOutcome};
use crate::normalize::normalize;
use crate::traits::{Extractor, Fetcher, Sanitizer};
use crate::util::validate_url_scheme;

/// Orchestrates the article pipeline: validate → fetch → extract → normalize → sanitize.
///
/// Generic over all external dependencies via traits, enabling dependency injection
/// and testability without real HTTP calls. Holds no mutable state, so one parser
/// can serve concurrent requests.
#[derive(Clone)]
pub struct ArticleParser<F, E, S>
where
    F: Fetcher,
    E: Extractor,
    S: Sanitizer,
{
    fetcher: F,
    extractor: E,
    sanitizer: S,
}

impl<F, E, S> ArticleParser<F, E, S>
where
    F: Fetcher,
    E: Extractor,
    S: Sanitizer,
{
    pub fn new(fetcher: F, extractor: E, sanitizer: S) -> Self {
        Self {
            fetcher,
            extractor,
            sanitizer,
        }
    }

    /// Run the full pipeline for a URL.
    ///
    /// Never fails: every error is folded into [`PipelineOutcome::Error`].
    pub async fn parse_article(&self, url: &str) -> PipelineOutcome {
        finish(url, self.fetch_and_process(url).await)
    }

    /// Run the post-fetch half of the pipeline on HTML obtained elsewhere.
    pub async fn parse_document(&self, url: &str, html: String) -> PipelineOutcome {
        let result = match validate_url_scheme(url) {
            Ok(()) => self.process(url, html).await,
            Err(e) => Err(e),
        };
        finish(url, result)
    }

    async fn fetch_and_process(&self, url: &str) -> Result<ArticleResult, AppError> {
        // 1. Validate
        validate_url_scheme(url)?;

        // 2. Fetch
        tracing::info!("Fetching {}", url);
        let html = self.fetcher.fetch(url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        self.process(url, html).await
    }

    async fn process(&self, url: &str, html: String) -> Result<ArticleResult, AppError> {
        // 3. Extract
        let extractor = self.extractor.clone();
        let page_url = url.to_string();
        let raw = tokio::task::spawn_blocking(move || extractor.extract(&html, &page_url))
            .await
            .map_err(extraction_fault)??;

        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| url.to_string());
        tracing::info!(
            %title,
            byline = ?raw.byline,
            excerpt = ?raw.excerpt,
            "Extracted readable content"
        );

        // 4. Normalize
        let text = normalize(raw.plain_text);

        // 5. Sanitize
        let content = self.sanitizer.sanitize(&text);
        tracing::info!(
            "Sanitized to {} bytes of content ({} bytes removed)",
            content.len(),
            text.len().saturating_sub(content.len())
        );

        Ok(ArticleResult {
            title,
            content,
            url: url.to_string(),
        })
    }
}

fn finish(url: &str, result: Result<ArticleResult, AppError>) -> PipelineOutcome {
    match result {
        Ok(article) => PipelineOutcome::Article(article),
        Err(e) => {
            if e.is_fetch_error() {
                tracing::warn!(%url, kind = e.kind(), error = %e, "Article fetch failed");
            } else {
                tracing::error!(%url, kind = e.kind(), error = %e, "Article parsing failed");
            }
            PipelineOutcome::Error(e.into())
        }
    }
}

/// Convert a failed extraction task into an [`AppError::ExtractionError`].
fn extraction_fault(err: JoinError) -> AppError {
    if err.is_panic() {
        AppError::ExtractionError(panic_message(err.into_panic()))
    } else {
        AppError::ExtractionError(err.to_string())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "extractor panicked".to_string()
    }
}
