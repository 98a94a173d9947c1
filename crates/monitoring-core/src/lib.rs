//! monitoring core: transport-agnostic device model and error types.
//!
//! This crate defines the wire-level `Device` record and the error surface
//! shared by the gateway and its tests. It carries no transport or runtime
//! dependencies so the model can be reused outside the HTTP process.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MonitoringError`/`Result` so a
//! malformed request body never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod device;
pub mod error;

pub use device::Device;
pub use error::{MonitoringError, Result};
