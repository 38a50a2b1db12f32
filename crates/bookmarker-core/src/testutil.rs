//! Test utilities: mock implementations of the pipeline traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{PlainText, RawExtraction};
use crate::traits::{Extractor, Fetcher, Sanitizer};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response and records requested URLs.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum ExtractorBehavior {
    Return(RawExtraction),
    Fail(String),
    Panic,
}

/// Mock extractor that returns a configurable [`RawExtraction`].
#[derive(Clone)]
pub struct MockExtractor {
    behavior: ExtractorBehavior,
    pub seen_html: Arc<Mutex<Vec<String>>>,
}

impl MockExtractor {
    pub fn new(title: Option<&str>, plain_text: PlainText) -> Self {
        Self::from_behavior(ExtractorBehavior::Return(RawExtraction::new(
            title.map(str::to_string),
            plain_text,
        )))
    }

    pub fn with_raw(raw: RawExtraction) -> Self {
        Self::from_behavior(ExtractorBehavior::Return(raw))
    }

    /// Extractor that yields the given plain text under a fixed title.
    pub fn with_text(text: &str) -> Self {
        Self::new(Some("Test Article"), PlainText::Text(text.to_string()))
    }

    pub fn with_error(message: &str) -> Self {
        Self::from_behavior(ExtractorBehavior::Fail(message.to_string()))
    }

    /// Extractor that panics, standing in for a library-internal fault.
    pub fn panicking() -> Self {
        Self::from_behavior(ExtractorBehavior::Panic)
    }

    fn from_behavior(behavior: ExtractorBehavior) -> Self {
        Self {
            behavior,
            seen_html: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, html: &str, _url: &str) -> Result<RawExtraction, AppError> {
        self.seen_html.lock().unwrap().push(html.to_string());
        match &self.behavior {
            ExtractorBehavior::Return(raw) => Ok(raw.clone()),
            ExtractorBehavior::Fail(message) => Err(AppError::ExtractionError(message.clone())),
            ExtractorBehavior::Panic => panic!("extractor blew up"),
        }
    }
}

// ---------------------------------------------------------------------------
// MockSanitizer
// ---------------------------------------------------------------------------

/// Mock sanitizer that returns its input unchanged and records it.
#[derive(Clone, Default)]
pub struct MockSanitizer {
    pub inputs: Arc<Mutex<Vec<String>>>,
}

impl MockSanitizer {
    pub fn passthrough() -> Self {
        Self::default()
    }
}

impl Sanitizer for MockSanitizer {
    fn sanitize(&self, text: &str) -> String {
        self.inputs.lock().unwrap().push(text.to_string());
        text.to_string()
    }
}
