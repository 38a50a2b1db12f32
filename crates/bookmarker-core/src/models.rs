use serde::{Deserialize, Serialize};

/// A successfully parsed article, ready to be stored or displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResult {
    pub title: String,
    /// Sanitized content (allow-listed tags only)
    pub content: String,
    pub url: String,
}

/// Failure of a pipeline run, reduced to a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub error: String,
}

impl From<crate::AppError> for ParseError {
    fn from(err: crate::AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Result of one `parse_article` call: exactly one of article or error.
///
/// Serialized untagged, so the JSON is either `{title, content, url}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PipelineOutcome {
    Article(ArticleResult),
    Error(ParseError),
}

impl PipelineOutcome {
    pub fn is_article(&self) -> bool {
        matches!(self, PipelineOutcome::Article(_))
    }

    pub fn into_result(self) -> Result<ArticleResult, ParseError> {
        match self {
            PipelineOutcome::Article(article) => Ok(article),
            PipelineOutcome::Error(err) => Err(err),
        }
    }
}

impl From<Result<ArticleResult, ParseError>> for PipelineOutcome {
    fn from(result: Result<ArticleResult, ParseError>) -> Self {
        match result {
            Ok(article) => PipelineOutcome::Article(article),
            Err(err) => PipelineOutcome::Error(err),
        }
    }
}

/// Plain-text field produced by an extractor.
///
/// Either one flat string or a sequence of text-bearing fragments, mirroring
/// the `plain_text` shape of readability-style JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlainText {
    Text(String),
    Fragments(Vec<PlainTextEntry>),
}

impl Default for PlainText {
    fn default() -> Self {
        PlainText::Text(String::new())
    }
}

/// One entry of [`PlainText::Fragments`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlainTextEntry {
    /// A bare string.
    Bare(String),
    /// An object carrying a `text` field; any `type` tag is kept but ignored.
    Node {
        #[serde(default)]
        text: Option<String>,
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// Anything else (numbers, booleans, null).
    Other(serde_json::Value),
}

impl PlainTextEntry {
    pub fn node(text: impl Into<String>, kind: impl Into<String>) -> Self {
        PlainTextEntry::Node {
            text: Some(text.into()),
            kind: Some(kind.into()),
        }
    }
}

/// Intermediate extractor output. Never leaves the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExtraction {
    /// Best-guess article title; `None` when the document has none.
    pub title: Option<String>,
    #[serde(default)]
    pub plain_text: PlainText,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub byline: Option<String>,
}

impl RawExtraction {
    pub fn new(title: Option<String>, plain_text: PlainText) -> Self {
        Self {
            title,
            plain_text,
            excerpt: None,
            byline: None,
        }
    }
}
