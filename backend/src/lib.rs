//! Authors directory backend.
//!
//! A single-resource CRUD HTTP service for author records, structured as a
//! hexagon: the [`domain`] module owns the model, validation, and use-case
//! service behind driving ports; [`inbound::http`] adapts actix-web to those
//! ports; [`outbound::persistence`] implements the repository port over
//! PostgreSQL (Diesel) or an in-memory store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
