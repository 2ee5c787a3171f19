//! Observability for the contact store.
//!
//! Atomic counters reported through `tracing`.

pub mod metrics;

pub use metrics::StoreMetrics;
