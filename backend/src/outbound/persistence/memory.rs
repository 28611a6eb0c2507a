//! In-memory `AuthorRepository` implementation.
//!
//! Backs the endpoint and service tests, and serves as the development
//! fallback when no `DATABASE_URL` is configured. Mirrors the database
//! adapter's lifecycle contract: sequential id assignment, timestamps set on
//! insert, `updated_at` refreshed (never rewound) on update, hard deletes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::ports::{AuthorPersistenceError, AuthorRepository};
use crate::domain::{Author, AuthorFields, AuthorId, NewAuthor};

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<AuthorId, Author>,
}

/// In-memory implementation of the `AuthorRepository` port.
#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    store: RwLock<Store>,
}

impl InMemoryAuthorRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply_changes(author: &mut Author, changes: &AuthorFields) {
    if let Some(name) = &changes.name {
        author.name.clone_from(name);
    }
    if let Some(email) = &changes.email {
        author.email.clone_from(email);
    }
    if let Some(github) = &changes.github {
        author.github = Some(github.clone());
    }
    if let Some(twitter) = &changes.twitter {
        author.twitter = Some(twitter.clone());
    }
    if let Some(location) = &changes.location {
        author.location.clone_from(location);
    }
    if let Some(latest) = &changes.latest_article_published {
        author.latest_article_published = Some(latest.clone());
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn list(&self) -> Result<Vec<Author>, AuthorPersistenceError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorPersistenceError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn insert(&self, author: &NewAuthor) -> Result<Author, AuthorPersistenceError> {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = AuthorId::new(store.next_id);
        let now = Utc::now();
        let record = Author {
            id,
            name: author.name.clone(),
            email: author.email.clone(),
            github: author.github.clone(),
            twitter: author.twitter.clone(),
            location: author.location.clone(),
            latest_article_published: author.latest_article_published.clone(),
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: AuthorId,
        changes: &AuthorFields,
    ) -> Result<Option<Author>, AuthorPersistenceError> {
        let mut store = self.store.write().await;
        let Some(author) = store.rows.get_mut(&id) else {
            return Ok(None);
        };
        apply_changes(author, changes);
        // Wall clocks can step backwards; keep updated_at non-decreasing.
        author.updated_at = Utc::now().max(author.updated_at);
        Ok(Some(author.clone()))
    }

    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorPersistenceError> {
        let mut store = self.store.write().await;
        Ok(store.rows.remove(&id).is_some())
    }
}
