//! Domain ports for the hexagonal boundary.

mod author_repository;
mod authors_command;
mod authors_query;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
pub use author_repository::{AuthorPersistenceError, AuthorRepository};
pub use authors_command::AuthorsCommand;
pub use authors_query::AuthorsQuery;
