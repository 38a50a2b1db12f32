use std::future::Future;

use crate::error::AppError;
use crate::models::RawExtraction;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Identifies the main readable content of an HTML document.
///
/// Implementations are CPU bound and run on the blocking pool, hence `'static`.
pub trait Extractor: Send + Sync + Clone + 'static {
    /// `url` is the address the HTML was fetched from, used to resolve links.
    fn extract(&self, html: &str, url: &str) -> Result<RawExtraction, AppError>;
}

/// Filters text through a tag allow-list.
pub trait Sanitizer: Send + Sync + Clone {
    fn sanitize(&self, text: &str) -> String;
}
