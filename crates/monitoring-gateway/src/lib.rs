//! Monitoring gateway library entry.
//!
//! This crate wires the device registry, the metrics sink, and the two HTTP
//! routers (management API and metrics scrape) into one process. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
