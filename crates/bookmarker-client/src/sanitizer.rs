use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use ammonia::Builder;
use bookmarker_core::traits::Sanitizer;

/// Tags allowed through sanitization. Everything else is stripped.
pub const ALLOWED_TAGS: [&str; 9] = [
    "p",
    "h1",
    "h2",
    "h3",
    "br",
    "hr",
    "pre",
    "code",
    "blockquote",
];

/// Allow-list HTML sanitizer using ammonia.
///
/// Disallowed tags are stripped but their text is kept, so
/// `<script>alert('x')</script>` becomes the inert text `alert('x')`.
/// All attributes are removed, including on allowed tags.
pub struct AmmoniaSanitizer {
    builder: Arc<Builder<'static>>,
}

impl Clone for AmmoniaSanitizer {
    fn clone(&self) -> Self {
        Self {
            builder: Arc::clone(&self.builder),
        }
    }
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        Self::with_clean_content_tags(HashSet::new())
    }

    /// Like [`new`](Self::new), but drops the content of `script` and `style`
    /// elements instead of keeping it as text.
    pub fn dropping_script_content() -> Self {
        Self::with_clean_content_tags(HashSet::from(["script", "style"]))
    }

    fn with_clean_content_tags(clean_content_tags: HashSet<&'static str>) -> Self {
        let mut builder = Builder::default();
        builder
            .tags(HashSet::from(ALLOWED_TAGS))
            .clean_content_tags(clean_content_tags)
            .generic_attributes(HashSet::new())
            .tag_attributes(HashMap::new())
            .link_rel(None)
            .strip_comments(true);

        Self {
            builder: Arc::new(builder),
        }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for AmmoniaSanitizer {
    fn sanitize(&self, text: &str) -> String {
        // The parser eats one newline after `<pre>` and the serializer never
        // writes it back. `<pre>` carries no attributes here, so the tag text is exact.
        self.builder
            .clean(text)
            .to_string()
            .replace("<pre>\n", "<pre>\n\n")
    }
}
