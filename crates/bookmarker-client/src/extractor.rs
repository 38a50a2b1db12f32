use bookmarker_core::error::AppError;
use bookmarker_core::models::{PlainText, PlainTextEntry, RawExtraction};
use bookmarker_core::traits::Extractor;
use dom_smoothie::{Config, Readability};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::DEFAULT_MAX_ELEMENTS;

/// Elements that form one plain-text fragment each.
const BLOCK_TAGS: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "li",
    "pre",
    "blockquote",
    "td",
    "th",
    "dt",
    "dd",
    "figcaption",
    "caption",
];

/// Elements whose text never reaches the output.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "iframe", "svg",
    "template", "button",
];

/// Readable-content extractor built on dom_smoothie (a port of Mozilla's Readability).
///
/// The readable HTML is split into block-level fragments, so the plain text
/// keeps one entry per heading / paragraph / list item. Documents Readability
/// gives up on are walked directly from `<body>`.
#[derive(Debug, Clone)]
pub struct ReadabilityExtractor {
    max_elements_to_parse: usize,
}

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self {
            max_elements_to_parse: DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Cap the readability pass; documents with more elements use the body walk.
    pub fn with_max_elements(mut self, max: usize) -> Self {
        self.max_elements_to_parse = max;
        self
    }

    fn readability(&self, html: &str, url: &str) -> Result<Readability, AppError> {
        let cfg = Config {
            max_elements_to_parse: self.max_elements_to_parse,
            ..Default::default()
        };
        // Readability resolves links against the document URL and rejects unparsable ones.
        let document_url = Url::parse(url).ok().map(|_| url);

        Readability::new(html, document_url, Some(cfg))
            .map_err(|e| AppError::ExtractionError(e.to_string()))
    }
}

impl Default for ReadabilityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ReadabilityExtractor {
    fn extract(&self, html: &str, url: &str) -> Result<RawExtraction, AppError> {
        let parsed = self.readability(html, url).and_then(|mut readability| {
            readability
                .parse()
                .map_err(|e| AppError::ExtractionError(e.to_string()))
        });

        let article = match parsed {
            Ok(article) => article,
            Err(e) => {
                tracing::debug!(error = %e, "Readability found no article, walking <body>");
                return body_extraction(html);
            }
        };

        let fragments = fragments_of(Html::parse_fragment(&article.content).root_element());
        let plain_text = if fragments.is_empty() {
            PlainText::Text(collapse_whitespace(&article.text_content))
        } else {
            PlainText::Fragments(fragments)
        };

        Ok(RawExtraction {
            title: non_blank(&article.title),
            plain_text,
            excerpt: article.excerpt.as_deref().and_then(non_blank),
            byline: article.byline.as_deref().and_then(non_blank),
        })
    }
}

/// Fallback used when Readability cannot score any content.
fn body_extraction(html: &str) -> Result<RawExtraction, AppError> {
    let document = Html::parse_document(html);
    let title_selector = selector("title")?;
    let body_selector = selector("body")?;
    let description_selector = selector(r#"meta[name="description"]"#)?;

    let title = document
        .select(&title_selector)
        .next()
        .and_then(|t| non_blank(&t.text().collect::<String>()));

    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let excerpt = document
        .select(&description_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .and_then(non_blank);

    Ok(RawExtraction {
        excerpt,
        ..RawExtraction::new(title, PlainText::Fragments(fragments_of(root)))
    })
}

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::ExtractionError(format!("bad selector {css}: {e}")))
}

/// Split an element tree into one fragment per outermost block element.
///
/// Text sitting directly inside non-block containers is gathered into
/// `text` fragments so nothing readable is dropped.
fn fragments_of(root: ElementRef<'_>) -> Vec<PlainTextEntry> {
    let mut walker = FragmentWalker::default();
    walker.walk(root);
    walker.flush();
    walker.fragments
}

#[derive(Default)]
struct FragmentWalker {
    fragments: Vec<PlainTextEntry>,
    pending: String,
}

impl FragmentWalker {
    fn walk(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                self.pending.push_str(text);
                continue;
            }
            let Some(child) = ElementRef::wrap(child) else {
                continue;
            };
            let name = child.value().name();
            if SKIP_TAGS.contains(&name) {
                continue;
            }
            if BLOCK_TAGS.contains(&name) {
                self.flush();
                let mut raw = String::new();
                visible_text(child, &mut raw);
                let text = if name == "pre" {
                    raw.trim().to_string()
                } else {
                    collapse_whitespace(&raw)
                };
                if !text.is_empty() {
                    self.fragments.push(PlainTextEntry::node(text, name));
                }
            } else if name == "br" {
                self.pending.push(' ');
            } else {
                self.walk(child);
            }
        }
    }

    fn flush(&mut self) {
        let text = collapse_whitespace(&self.pending);
        self.pending.clear();
        if !text.is_empty() {
            self.fragments.push(PlainTextEntry::node(text, "text"));
        }
    }
}

/// Text of an element and its descendants, minus skipped subtrees.
fn visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            match child.value().name() {
                "br" => out.push(' '),
                name if SKIP_TAGS.contains(&name) => {}
                _ => visible_text(child, out),
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
