//! Observability for vitrine
//!
//! - Structured logging: one JSON line per event, deterministic key
//!   order, synchronous writes
//! - Metrics: monotonic counters only, reset on process start
//!
//! Observability is read-only; nothing here affects query results.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
