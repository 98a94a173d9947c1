//! Shared application state for the monitoring gateway.
//!
//! `Fleet` is the single owner of the device registry. Every read and
//! mutation goes through one async mutex, and the metric update that mirrors
//! a mutation is applied before the guard is released so scrapes never see
//! a gauge that disagrees with the registry.

use std::sync::Arc;

use prometheus::Registry;
use tokio::sync::Mutex;

use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::Device;

use crate::config::GatewayConfig;
use crate::obs::MetricsSink;
use crate::registry::DeviceRegistry;

/// Label value for the upgrade counter. Every managed device is a router.
pub const UPGRADE_KIND: &str = "router";

pub struct Fleet {
    devices: Mutex<DeviceRegistry>,
    metrics: MetricsSink,
}

impl Fleet {
    /// Seed the registry and publish its initial size.
    pub fn new(seeds: Vec<Device>, metrics: MetricsSink) -> Self {
        let registry = DeviceRegistry::with_seeds(seeds);
        metrics.set_connected_devices(registry.len());
        Self {
            devices: Mutex::new(registry),
            metrics,
        }
    }

    pub async fn list(&self) -> Vec<Device> {
        self.devices.lock().await.list().to_vec()
    }

    /// Append a device unless its id is already taken.
    /// Returns the registry length after the append.
    pub async fn create(&self, d: Device) -> Result<usize> {
        let mut devices = self.devices.lock().await;
        if devices.contains(d.id) {
            return Err(MonitoringError::Conflict(d.id));
        }
        devices.append(d);
        let len = devices.len();
        self.metrics.set_connected_devices(len);
        Ok(len)
    }

    /// Set the firmware of every device with this id and count the upgrade.
    /// The counter moves even when nothing matched.
    pub async fn upgrade(&self, id: i64, firmware: &str) -> usize {
        let mut devices = self.devices.lock().await;
        let matched = devices.update_firmware(id, firmware);
        self.metrics.increment_upgrades(UPGRADE_KIND);
        matched
    }

    pub fn metrics(&self) -> &MetricsSink {
        &self.metrics
    }
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    fleet: Arc<Fleet>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Registry,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report metric registration failures.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let registry = Registry::new();
        Self::with_registry(cfg, registry)
    }

    /// Build state on a caller-provided metrics registry.
    pub fn with_registry(cfg: GatewayConfig, registry: Registry) -> Result<Self> {
        let metrics = MetricsSink::new(&registry)?;
        metrics.set_info(&cfg.app.version);

        let fleet = Fleet::new(cfg.seeds(), metrics);

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
            fleet: Arc::new(fleet),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn fleet(&self) -> Arc<Fleet> {
        Arc::clone(&self.fleet)
    }
}
