use crate::models::{PlainText, PlainTextEntry};

/// Flatten an extractor's plain-text field into a single string.
///
/// A flat string is returned unchanged. Fragments are mapped to their text
/// (`Node` without `text` contributes an empty string) and joined with a
/// single space, in order.
pub fn normalize(plain_text: PlainText) -> String {
    match plain_text {
        PlainText::Text(text) => text,
        PlainText::Fragments(entries) => entries
            .into_iter()
            .map(entry_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn entry_text(entry: PlainTextEntry) -> String {
    match entry {
        PlainTextEntry::Bare(text) => text,
        PlainTextEntry::Node { text, .. } => text.unwrap_or_default(),
        PlainTextEntry::Other(value) => value.to_string(),
    }
}
