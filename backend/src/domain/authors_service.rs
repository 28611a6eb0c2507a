//! Authors use-case service.
//!
//! Implements the driving ports over an injected [`AuthorRepository`],
//! enforcing create-time validation and mapping persistence failures to the
//! API error contract. Each operation is a single atomic request/response;
//! there is no multi-step protocol.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::author::{Author, AuthorFields, AuthorId, NewAuthor};
use crate::domain::error::Error;
use crate::domain::ports::{AuthorPersistenceError, AuthorRepository, AuthorsCommand, AuthorsQuery};

/// Authors service implementing the driving ports.
#[derive(Clone)]
pub struct AuthorsService<R> {
    repo: Arc<R>,
}

impl<R> AuthorsService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: AuthorRepository> AuthorsService<R> {
    fn map_repo_error(error: AuthorPersistenceError) -> Error {
        match error {
            AuthorPersistenceError::Connection { message } => {
                warn!(%message, "author repository unavailable");
                Error::service_unavailable()
            }
            AuthorPersistenceError::Query { message } => {
                error!(%message, "author repository query failed");
                Error::internal()
            }
        }
    }
}

#[async_trait]
impl<R: AuthorRepository> AuthorsQuery for AuthorsService<R> {
    async fn list_authors(&self) -> Result<Vec<Author>, Error> {
        self.repo.list().await.map_err(Self::map_repo_error)
    }

    async fn fetch_author(&self, id: AuthorId) -> Result<Author, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Error::not_found)
    }
}

#[async_trait]
impl<R: AuthorRepository> AuthorsCommand for AuthorsService<R> {
    async fn create_author(&self, fields: AuthorFields) -> Result<Author, Error> {
        let draft = NewAuthor::try_from_fields(fields)?;
        self.repo.insert(&draft).await.map_err(Self::map_repo_error)
    }

    async fn update_author(&self, id: AuthorId, fields: AuthorFields) -> Result<Author, Error> {
        self.repo
            .update(id, &fields)
            .await
            .map_err(Self::map_repo_error)?
            .ok_or_else(Error::not_found)
    }

    async fn delete_author(&self, id: AuthorId) -> Result<(), Error> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(Self::map_repo_error)?;
        if removed {
            Ok(())
        } else {
            Err(Error::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use crate::domain::ports::MockAuthorRepository;
    use chrono::Utc;

    fn make_service(repo: MockAuthorRepository) -> AuthorsService<MockAuthorRepository> {
        AuthorsService::new(Arc::new(repo))
    }

    fn stored_author(id: i32) -> Author {
        let now = Utc::now();
        Author {
            id: AuthorId::new(id),
            name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            github: None,
            twitter: None,
            location: "NewYork".into(),
            latest_article_published: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn valid_fields() -> AuthorFields {
        AuthorFields {
            name: Some("John Doe".into()),
            email: Some("john.doe@email.com".into()),
            location: Some("NewYork".into()),
            ..AuthorFields::default()
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_touching_storage() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_insert().times(0);

        let service = make_service(repo);
        let error = service
            .create_author(AuthorFields::default())
            .await
            .expect_err("validation failure");

        assert_eq!(error.kind, ErrorKind::Validation);
        let fields = error.fields.expect("field messages present");
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("location"));
    }

    #[tokio::test]
    async fn create_persists_a_valid_draft() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_insert()
            .withf(|draft: &NewAuthor| draft.name == "John Doe")
            .times(1)
            .return_once(|_| Ok(stored_author(1)));

        let service = make_service(repo);
        let author = service
            .create_author(valid_fields())
            .await
            .expect("created author");
        assert_eq!(author.id, AuthorId::new(1));
    }

    #[tokio::test]
    async fn fetch_maps_missing_record_to_not_found() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let service = make_service(repo);
        let error = service
            .fetch_author(AuthorId::new(42))
            .await
            .expect_err("missing record");
        assert_eq!(error.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn update_maps_missing_record_to_not_found() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_update().times(1).return_once(|_, _| Ok(None));

        let service = make_service(repo);
        let error = service
            .update_author(AuthorId::new(42), AuthorFields::default())
            .await
            .expect_err("missing record");
        assert_eq!(error.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_maps_missing_record_to_not_found() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(false));

        let service = make_service(repo);
        let error = service
            .delete_author(AuthorId::new(42))
            .await
            .expect_err("missing record");
        assert_eq!(error.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_succeeds_when_a_record_was_removed() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(true));

        let service = make_service(repo);
        service
            .delete_author(AuthorId::new(1))
            .await
            .expect("deleted");
    }

    #[tokio::test]
    async fn connection_failures_surface_as_service_unavailable() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(AuthorPersistenceError::connection("connection refused")));

        let service = make_service(repo);
        let error = service.list_authors().await.expect_err("unavailable");
        assert_eq!(error.kind, ErrorKind::ServiceUnavailable);
    }

    #[tokio::test]
    async fn query_failures_surface_as_internal_errors() {
        let mut repo = MockAuthorRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Err(AuthorPersistenceError::query("bad statement")));

        let service = make_service(repo);
        let error = service
            .fetch_author(AuthorId::new(1))
            .await
            .expect_err("internal");
        assert_eq!(error.kind, ErrorKind::Internal);
    }
}
