use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use bookmarker_core::PipelineOutcome;

use crate::dto::{ArticleListResponse, ArticleResponse, HealthResponse, ParseRequest, SaveForm};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::store::StoredArticle;
use crate::views;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
        .route("/save", post(save_article))
        .route("/article/{id}", get(view_article).delete(delete_article));

    let api = Router::new()
        .route("/v1/parse", post(parse))
        .route("/v1/articles", get(list_articles))
        .route("/v1/articles/{id}", get(get_article));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(pages).merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub async fn home() -> Redirect {
    Redirect::to("/dashboard")
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::dashboard(&state.store.list()))
}

/// Parse and store an article submitted from the dashboard form.
///
/// htmx requests (`hx-request: true`) get the new article card back;
/// plain form posts are redirected to the dashboard.
pub async fn save_article(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<SaveForm>,
) -> Response {
    let article = match state.parser.parse_article(&form.url).await {
        PipelineOutcome::Article(article) => article,
        PipelineOutcome::Error(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(views::error_fragment(&err.error)),
            )
                .into_response();
        }
    };

    let stored = state.store.insert(article);
    tracing::info!(id = %stored.id, url = %stored.url, "Article saved");

    let is_htmx = headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true");

    if is_htmx {
        Html(views::article_card(&stored)).into_response()
    } else {
        Redirect::to("/dashboard").into_response()
    }
}

pub async fn view_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match find(&state, &id) {
        Some(article) => Html(views::article_page(&article)).into_response(),
        None => Redirect::to("/dashboard").into_response(),
    }
}

/// Always answers 204, whether or not the article existed.
pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    if let Ok(id) = id.parse::<Uuid>() {
        if state.store.remove(id) {
            tracing::info!(%id, "Article deleted");
        }
    }
    StatusCode::NO_CONTENT
}

fn find(state: &AppState, id: &str) -> Option<StoredArticle> {
    id.parse::<Uuid>().ok().and_then(|id| state.store.get(id))
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/v1/parse",
    request_body = ParseRequest,
    responses(
        (status = 200, description = "Parsed article", body = ArticleResponse),
        (status = 400, description = "Pipeline failure", body = crate::dto::ParseErrorResponse),
    ),
    tag = "articles"
)]
pub async fn parse(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ParseRequest>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = state.parser.parse_article(&body.url).await.into_result()?;
    Ok(Json(ArticleResponse::from(article)))
}

#[utoipa::path(
    get,
    path = "/v1/articles",
    responses(
        (status = 200, description = "Saved articles, oldest first", body = ArticleListResponse),
    ),
    tag = "articles"
)]
pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<ArticleListResponse> {
    let articles = state.store.list();
    let total = articles.len();
    Json(ArticleListResponse { articles, total })
}

#[utoipa::path(
    get,
    path = "/v1/articles/{id}",
    params(
        ("id" = Uuid, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Saved article", body = StoredArticle),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredArticle>, ApiError> {
    state
        .store
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Article not found: {id}")))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        articles: state.store.len(),
    })
}
