//! Outbound persistence adapters implementing the repository port.

mod diesel_author_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_author_repository::DieselAuthorRepository;
pub use memory::InMemoryAuthorRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
