//! Outbound adapters connecting domain ports to infrastructure.

pub mod persistence;
