//! Domain model, errors, ports, and the authors use-case service.
//!
//! Types here are transport agnostic. Inbound adapters map them to HTTP;
//! outbound adapters persist them. Serialisation contracts (serde) are
//! documented on each type.

pub mod author;
pub mod authors_service;
pub mod error;
pub mod ports;

pub use self::author::{Author, AuthorFields, AuthorId, NewAuthor};
pub use self::authors_service::AuthorsService;
pub use self::error::{Error, ErrorKind, FieldMessages};
