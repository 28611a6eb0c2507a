//! Driven port for author persistence adapters and their errors.
//!
//! The [`AuthorRepository`] trait is the storage contract the use-case
//! service is injected with. Adapters own id assignment and both audit
//! timestamps so the record lifecycle is enforced in one place regardless
//! of the backing store.

use async_trait::async_trait;

use crate::domain::author::{Author, AuthorFields, AuthorId, NewAuthor};

/// Persistence errors raised by author repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorPersistenceError {
    /// Repository connection could not be established.
    #[error("author repository connection failed: {message}")]
    Connection {
        /// Adapter-specific failure description, for logs only.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("author repository query failed: {message}")]
    Query {
        /// Adapter-specific failure description, for logs only.
        message: String,
    },
}

impl AuthorPersistenceError {
    /// Create a connection error with the given message.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for author storage and retrieval.
///
/// ## Contract
/// - `insert` assigns the id and sets both timestamps to the current time.
/// - `update` merges the supplied fields into the stored record (absent
///   fields retained), refreshes `updated_at`, and returns `None` when no
///   record has the id.
/// - `delete` is a hard delete; `false` reports an absent id.
/// - Writes are atomic from the caller's perspective; concurrent updates to
///   the same id resolve last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Fetch every stored author in ascending id order.
    async fn list(&self) -> Result<Vec<Author>, AuthorPersistenceError>;

    /// Fetch an author by identifier.
    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorPersistenceError>;

    /// Persist a validated draft, assigning id and timestamps.
    async fn insert(&self, author: &NewAuthor) -> Result<Author, AuthorPersistenceError>;

    /// Merge the supplied fields into an existing record.
    async fn update(
        &self,
        id: AuthorId,
        changes: &AuthorFields,
    ) -> Result<Option<Author>, AuthorPersistenceError>;

    /// Remove a record permanently. Returns `false` when the id is absent.
    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorPersistenceError>;
}
