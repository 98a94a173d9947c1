//! Metrics sink mirroring registry state.
//!
//! | Metric | Type | Labels |
//! |--------|------|--------|
//! | `monitoringsystem_connected_devices` | Gauge | — |
//! | `monitoringsystem_info` | Gauge | `version` |
//! | `monitoringsystem_upgrades` | Counter | `type` |

use prometheus::{Encoder, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};

use monitoring_core::error::{MonitoringError, Result};

pub const NAMESPACE: &str = "monitoringsystem";

/// Content type of the text exposition format.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Named instruments for the device fleet.
///
/// All instruments are atomics and the struct is cheap to clone.
/// Only one sink may be built per registry: a second `new` against the same
/// registry fails because the collector names are already taken.
#[derive(Clone)]
pub struct MetricsSink {
    devices: IntGauge,
    info: IntGaugeVec,
    upgrades: IntCounterVec,
}

impl MetricsSink {
    /// Create the instruments and register them with `registry`.
    ///
    /// # Errors
    ///
    /// Returns `MonitoringError::Metrics` if any instrument fails to register
    /// (e.g. duplicate name).
    pub fn new(registry: &Registry) -> Result<Self> {
        let devices = IntGauge::with_opts(
            Opts::new("connected_devices", "Number of connected devices").namespace(NAMESPACE),
        )
        .map_err(metrics_err)?;

        let info = IntGaugeVec::new(
            Opts::new("info", "Info about the environment").namespace(NAMESPACE),
            &["version"],
        )
        .map_err(metrics_err)?;

        let upgrades = IntCounterVec::new(
            Opts::new("upgrades", "Number of upgrades").namespace(NAMESPACE),
            &["type"],
        )
        .map_err(metrics_err)?;

        registry.register(Box::new(devices.clone())).map_err(metrics_err)?;
        registry.register(Box::new(info.clone())).map_err(metrics_err)?;
        registry.register(Box::new(upgrades.clone())).map_err(metrics_err)?;

        Ok(Self {
            devices,
            info,
            upgrades,
        })
    }

    pub fn set_connected_devices(&self, n: usize) {
        self.devices.set(i64::try_from(n).unwrap_or(i64::MAX));
    }

    pub fn set_info(&self, version: &str) {
        self.info.with_label_values(&[version]).set(1);
    }

    pub fn increment_upgrades(&self, kind: &str) {
        self.upgrades.with_label_values(&[kind]).inc();
    }

    #[must_use]
    pub fn connected_devices(&self) -> i64 {
        self.devices.get()
    }

    #[must_use]
    pub fn info(&self, version: &str) -> i64 {
        self.info.with_label_values(&[version]).get()
    }

    #[must_use]
    pub fn upgrades(&self, kind: &str) -> u64 {
        self.upgrades.with_label_values(&[kind]).get()
    }
}

/// Render every family gathered from `registry` in the text exposition format.
pub fn encode_text(registry: &Registry) -> Result<String> {
    let encoder = TextEncoder::new();
    let families = registry.gather();
    let mut buffer = Vec::new();
    encoder.encode(&families, &mut buffer).map_err(metrics_err)?;
    String::from_utf8(buffer).map_err(|e| MonitoringError::Metrics(e.to_string()))
}

fn metrics_err(e: prometheus::Error) -> MonitoringError {
    MonitoringError::Metrics(e.to_string())
}
