use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration::common::{ARTICLE_TITLE, setup_test_app};

fn save_request(url: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::post("/save").header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if htmx {
        builder = builder.header("hx-request", "true");
    }
    let form = format!("url={}", encode_form_value(url));
    builder.body(Body::from(form)).unwrap()
}

fn encode_form_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace(':', "%3A")
        .replace('/', "%2F")
        .replace(' ', "+")
}

async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = get(&app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["articles"], 0);
}

#[tokio::test]
async fn home_redirects_to_dashboard() {
    let app = setup_test_app().await;

    let response = get(&app.router, "/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn empty_dashboard_shows_placeholder() {
    let app = setup_test_app().await;

    let response = get(&app.router, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No articles saved yet"));
}

#[tokio::test]
async fn save_view_and_delete_article() {
    let app = setup_test_app().await;
    let url = app.upstream_url("/article");

    // Save
    let response = app
        .router
        .clone()
        .oneshot(save_request(&url, false))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
    assert_eq!(app.state.store.len(), 1);

    // Dashboard lists it
    let dashboard = body_text(get(&app.router, "/dashboard").await).await;
    assert!(dashboard.contains(ARTICLE_TITLE));
    assert!(dashboard.contains(&format!(r#"href="{url}""#)));
    assert!(!dashboard.contains("No articles saved yet"));

    // View
    let id = app.state.store.list()[0].id;
    let response = get(&app.router, &format!("/article/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("first paragraph"));
    assert!(!page.contains("<script"));
    assert!(!page.contains("https://example.com"));

    // Delete
    let response = app
        .router
        .clone()
        .oneshot(
            Request::delete(format!("/article/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.state.store.is_empty());

    let dashboard = body_text(get(&app.router, "/dashboard").await).await;
    assert!(dashboard.contains("No articles saved yet"));
}

#[tokio::test]
async fn htmx_save_returns_article_card() {
    let app = setup_test_app().await;
    let url = app.upstream_url("/article");

    let response = app
        .router
        .clone()
        .oneshot(save_request(&url, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let card = body_text(response).await;
    assert!(card.contains(r#"class="card""#));
    assert!(card.contains(ARTICLE_TITLE));
    assert_eq!(app.state.store.len(), 1);
}

#[tokio::test]
async fn save_invalid_url_returns_error_fragment() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(save_request("ftp://example.com/file", false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Invalid URL format"));
    assert!(app.state.store.is_empty());
}

#[tokio::test]
async fn save_upstream_404_returns_error_fragment() {
    let app = setup_test_app().await;
    let url = app.upstream_url("/missing");

    let response = app
        .router
        .clone()
        .oneshot(save_request(&url, false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("404 Client Error: Not Found for url:"));
    assert!(app.state.store.is_empty());
}

#[tokio::test]
async fn delete_unknown_article_returns_204() {
    let app = setup_test_app().await;

    for id in ["00000000-0000-0000-0000-000000000000", "not-a-uuid"] {
        let response = app
            .router
            .clone()
            .oneshot(
                Request::delete(format!("/article/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn view_unknown_article_redirects() {
    let app = setup_test_app().await;

    let response = get(&app.router, "/article/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn api_parse_returns_article() {
    let app = setup_test_app().await;
    let url = app.upstream_url("/article");

    let response = app
        .router
        .clone()
        .oneshot(
            Request::post("/v1/parse")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({ "url": &url }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["title"], ARTICLE_TITLE);
    assert_eq!(json["url"], url);
    let content = json["content"].as_str().unwrap();
    assert!(content.contains("second paragraph"));
    assert!(!content.contains("href"));

    // Parsing does not save
    assert!(app.state.store.is_empty());
}

#[tokio::test]
async fn api_parse_invalid_url_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::post("/v1/parse")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"url":"example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Invalid URL format" }));
}

#[tokio::test]
async fn api_lists_and_gets_saved_articles() {
    let app = setup_test_app().await;
    let url = app.upstream_url("/article");

    app.router
        .clone()
        .oneshot(save_request(&url, false))
        .await
        .unwrap();

    let response = get(&app.router, "/v1/articles").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["total"], 1);
    let id = json["articles"][0]["id"].as_str().unwrap().to_string();

    let response = get(&app.router, &format!("/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["url"], url);
    assert_eq!(json["title"], ARTICLE_TITLE);
}

#[tokio::test]
async fn api_get_unknown_article_returns_404() {
    let app = setup_test_app().await;

    let response = get(&app.router, "/v1/articles/00000000-0000-0000-0000-000000000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "not_found");
}
