//! Top-level facade crate for the monitoring service.
//!
//! Re-exports the device model and the gateway library so users can depend on a single crate.

pub mod core {
    pub use monitoring_core::*;
}

pub mod gateway {
    pub use monitoring_gateway::*;
}
