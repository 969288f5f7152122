//! Shared observability setup (tracing/logging).

pub mod tracing;

pub use tracing::init;
