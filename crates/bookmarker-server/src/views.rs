//! HTML fragments for the browser-facing routes.
//!
//! Titles, urls and messages are escaped; article content is inserted as-is
//! because it has already been through the sanitizer.

use crate::store::StoredArticle;

pub fn dashboard(articles: &[StoredArticle]) -> String {
    let mut list = String::new();
    if articles.is_empty() {
        list.push_str(r#"<p class="empty">No articles saved yet</p>"#);
    } else {
        for article in articles {
            list.push_str(&article_card(article));
        }
    }

    page(
        "Bookmarker",
        &format!(
            r##"<h1>Bookmarker</h1>
<form method="post" action="/save" hx-post="/save" hx-target="#articles" hx-swap="beforeend">
  <input type="url" name="url" placeholder="https://..." required>
  <button type="submit">Save</button>
</form>
<section id="articles">{list}</section>"##
        ),
    )
}

pub fn article_card(article: &StoredArticle) -> String {
    let id = article.id;
    let title = escape_html(&article.title);
    let url = escape_html(&article.url);
    format!(
        r#"<article class="card" id="article-{id}">
  <h2><a href="/article/{id}">{title}</a></h2>
  <a class="source" href="{url}">{url}</a>
  <small>{saved}</small>
  <button hx-delete="/article/{id}" hx-target="closest article" hx-swap="outerHTML">Delete</button>
</article>"#,
        saved = article.saved_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

pub fn article_page(article: &StoredArticle) -> String {
    let title = escape_html(&article.title);
    let url = escape_html(&article.url);
    page(
        &article.title,
        &format!(
            r#"<a href="/dashboard">Back</a>
<h1>{title}</h1>
<a class="source" href="{url}">{url}</a>
<div class="content">{content}</div>"#,
            content = article.content,
        ),
    )
}

pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert"><p>{}</p></div>"#,
        escape_html(message)
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{}</title></head>
<body>
{body}
</body>
</html>"#,
        escape_html(title)
    )
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
