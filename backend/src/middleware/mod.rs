//! Actix middleware for the authors service.

pub mod trace;

pub use trace::{Trace, TraceId};
