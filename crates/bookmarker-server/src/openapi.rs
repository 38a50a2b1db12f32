use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookmarker API",
        version = "0.1.0",
        description = "Save web articles as sanitized readable text."
    ),
    paths(
        crate::routes::parse,
        crate::routes::list_articles,
        crate::routes::get_article,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::ParseRequest,
        crate::dto::ArticleResponse,
        crate::dto::ParseErrorResponse,
        crate::dto::ArticleListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
        crate::store::StoredArticle,
    )),
    tags(
        (name = "articles", description = "Article parsing and saved articles"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
