//! Process metrics backed by the `prometheus` crate.
//!
//! Instruments are registered once on a shared `prometheus::Registry` and
//! rendered by the `/metrics` handler on the metrics listener.

pub mod metrics;

pub use metrics::{MetricsSink, NAMESPACE};
