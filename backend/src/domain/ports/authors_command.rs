//! Driving port for author mutations.

use async_trait::async_trait;

use crate::domain::author::{Author, AuthorFields, AuthorId};
use crate::domain::error::Error;

/// Domain use-case port for creating, updating, and deleting authors.
#[async_trait]
pub trait AuthorsCommand: Send + Sync {
    /// Validate and persist a new author.
    ///
    /// Fails with [`Error::validation`] listing every invalid field before
    /// anything is persisted.
    async fn create_author(&self, fields: AuthorFields) -> Result<Author, Error>;

    /// Merge the supplied fields into an existing author.
    ///
    /// Absent fields retain their stored values; `updated_at` is refreshed.
    /// Fails with [`Error::not_found`] when the id is absent.
    async fn update_author(&self, id: AuthorId, fields: AuthorFields) -> Result<Author, Error>;

    /// Remove an author permanently.
    ///
    /// Fails with [`Error::not_found`] when the id is absent.
    async fn delete_author(&self, id: AuthorId) -> Result<(), Error>;
}
