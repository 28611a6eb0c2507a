//! Driving port for author read operations.
//!
//! Inbound adapters (HTTP handlers) use this port to read author records
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::author::{Author, AuthorId};
use crate::domain::error::Error;

/// Domain use-case port for reading authors.
#[async_trait]
pub trait AuthorsQuery: Send + Sync {
    /// Return every stored author in storage order; empty when none exist.
    async fn list_authors(&self) -> Result<Vec<Author>, Error>;

    /// Return the author with the given id.
    ///
    /// Fails with [`Error::not_found`] when no record has that id.
    async fn fetch_author(&self, id: AuthorId) -> Result<Author, Error>;
}
