use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use bookmarker_core::ArticleResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An article kept by the service, keyed by a generated id.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct StoredArticle {
    pub id: Uuid,
    pub title: String,
    /// Sanitized article content
    pub content: String,
    pub url: String,
    pub saved_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    order: Vec<Uuid>,
    articles: HashMap<Uuid, StoredArticle>,
}

/// Process-lifetime article storage, insertion ordered.
#[derive(Default)]
pub struct ArticleStore {
    inner: RwLock<Inner>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a parsed article under a fresh UUID.
    pub fn insert(&self, article: ArticleResult) -> StoredArticle {
        let stored = StoredArticle {
            id: Uuid::new_v4(),
            title: article.title,
            content: article.content,
            url: article.url,
            saved_at: Utc::now(),
        };

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.order.push(stored.id);
        inner.articles.insert(stored.id, stored.clone());
        stored
    }

    pub fn get(&self, id: Uuid) -> Option<StoredArticle> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.articles.get(&id).cloned()
    }

    /// All articles, oldest first.
    pub fn list(&self) -> Vec<StoredArticle> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.articles.get(id).cloned())
            .collect()
    }

    /// Remove an article. Returns false if it did not exist.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let removed = inner.articles.remove(&id).is_some();
        if removed {
            inner.order.retain(|existing| *existing != id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .articles
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
