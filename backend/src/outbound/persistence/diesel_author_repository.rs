//! PostgreSQL-backed `AuthorRepository` implementation using Diesel ORM.
//!
//! Id assignment and the `created_at`/`updated_at` defaults live in the
//! database (serial key + column defaults); partial updates go through a
//! changeset that skips absent fields and always refreshes `updated_at`.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AuthorPersistenceError, AuthorRepository};
use crate::domain::{Author, AuthorFields, AuthorId, NewAuthor};

use super::models::{AuthorChangeset, AuthorRow, NewAuthorRow};
use super::pool::{DbPool, PoolError};
use super::schema::authors;

/// Diesel-backed implementation of the `AuthorRepository` port.
#[derive(Clone)]
pub struct DieselAuthorRepository {
    pool: DbPool,
}

impl DieselAuthorRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to author persistence errors.
fn map_pool_error(error: PoolError) -> AuthorPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AuthorPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to author persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> AuthorPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AuthorPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => AuthorPersistenceError::query("record not found"),
        _ => AuthorPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain Author.
fn row_to_author(row: AuthorRow) -> Author {
    Author {
        id: AuthorId::new(row.id),
        name: row.name,
        email: row.email,
        github: row.github,
        twitter: row.twitter,
        location: row.location,
        latest_article_published: row.latest_article_published,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl AuthorRepository for DieselAuthorRepository {
    async fn list(&self) -> Result<Vec<Author>, AuthorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AuthorRow> = authors::table
            .order(authors::id.asc())
            .select(AuthorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_author).collect())
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, AuthorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AuthorRow> = authors::table
            .find(id.as_i32())
            .select(AuthorRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_author))
    }

    async fn insert(&self, author: &NewAuthor) -> Result<Author, AuthorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAuthorRow {
            name: &author.name,
            email: &author.email,
            github: author.github.as_deref(),
            twitter: author.twitter.as_deref(),
            location: &author.location,
            latest_article_published: author.latest_article_published.as_deref(),
        };

        let row: AuthorRow = diesel::insert_into(authors::table)
            .values(&new_row)
            .returning(AuthorRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_author(row))
    }

    async fn update(
        &self,
        id: AuthorId,
        changes: &AuthorFields,
    ) -> Result<Option<Author>, AuthorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = AuthorChangeset {
            name: changes.name.as_deref(),
            email: changes.email.as_deref(),
            github: changes.github.as_deref(),
            twitter: changes.twitter.as_deref(),
            location: changes.location.as_deref(),
            latest_article_published: changes.latest_article_published.as_deref(),
            updated_at: Utc::now(),
        };

        let row: Option<AuthorRow> = diesel::update(authors::table.find(id.as_i32()))
            .set(&changeset)
            .returning(AuthorRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_author))
    }

    async fn delete(&self, id: AuthorId) -> Result<bool, AuthorPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(authors::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the pure mapping helpers; query execution is
    //! covered by the endpoint tests over the in-memory adapter.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let repo_err = map_pool_error(pool_err);

        assert!(matches!(
            repo_err,
            AuthorPersistenceError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, AuthorPersistenceError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_to_author_preserves_every_column() {
        let now = Utc::now();
        let row = AuthorRow {
            id: 4,
            name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            github: Some("github.com/john".into()),
            twitter: None,
            location: "NewYork".into(),
            latest_article_published: Some("How to make an API documentation".into()),
            created_at: now,
            updated_at: now,
        };

        let author = row_to_author(row);

        assert_eq!(author.id, AuthorId::new(4));
        assert_eq!(author.github.as_deref(), Some("github.com/john"));
        assert!(author.twitter.is_none());
        assert_eq!(author.created_at, now);
    }
}
