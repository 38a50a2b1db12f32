use bookmarker_client::DefaultArticleParser;

use crate::store::ArticleStore;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub parser: DefaultArticleParser,
    pub store: ArticleStore,
}
