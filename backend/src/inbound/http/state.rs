//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthorRepository, AuthorsCommand, AuthorsQuery};
use crate::domain::AuthorsService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use cases.
    pub authors_query: Arc<dyn AuthorsQuery>,
    /// Write-side use cases.
    pub authors_command: Arc<dyn AuthorsCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub fn new(authors_query: Arc<dyn AuthorsQuery>, authors_command: Arc<dyn AuthorsCommand>) -> Self {
        Self {
            authors_query,
            authors_command,
        }
    }

    /// Construct state over a single repository by wiring the authors
    /// service to both driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use authors_backend::inbound::http::state::HttpState;
    /// use authors_backend::outbound::persistence::InMemoryAuthorRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryAuthorRepository::new()));
    /// let _query = state.authors_query.clone();
    /// ```
    #[must_use]
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: AuthorRepository + 'static,
    {
        let service = Arc::new(AuthorsService::new(repo));
        Self {
            authors_query: service.clone(),
            authors_command: service,
        }
    }
}
