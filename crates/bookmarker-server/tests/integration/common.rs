use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;

use bookmarker_client::{ClientConfig, build_parser};
use bookmarker_server::routes;
use bookmarker_server::state::AppState;
use bookmarker_server::store::ArticleStore;

pub const ARTICLE_TITLE: &str = "Integration Article";

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Integration Article</title></head>
<body>
  <article>
    <h1>Integration Article</h1>
    <p>The first paragraph has enough words in it to look like real prose to a reader.</p>
    <p>A second paragraph follows, with <a href="https://example.com">a link</a> inside.</p>
    <script>console.log("tracking");</script>
  </article>
</body>
</html>"#;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub upstream: SocketAddr,
}

impl TestApp {
    pub fn upstream_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.upstream)
    }
}

/// Build the app router against a local upstream serving `/article` and a 404 at `/missing`.
pub async fn setup_test_app() -> TestApp {
    let parser = build_parser(&ClientConfig::default()).expect("Failed to build parser");
    let state = Arc::new(AppState {
        parser,
        store: ArticleStore::new(),
    });

    TestApp {
        router: routes::router(state.clone()),
        state,
        upstream: spawn_upstream().await,
    }
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream");
    let addr = listener.local_addr().expect("Failed to read upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Upstream server failed");
    });
    addr
}
