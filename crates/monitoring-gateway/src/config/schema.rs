use std::collections::HashSet;
use std::net::SocketAddr;

use monitoring_core::error::{MonitoringError, Result};
use monitoring_core::Device;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub app: AppSection,

    #[serde(default = "default_seed_devices")]
    pub seed_devices: Vec<SeedDevice>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            app: AppSection::default(),
            seed_devices: default_seed_devices(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MonitoringError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.app.validate()?;

        let mut seen = HashSet::new();
        for d in &self.seed_devices {
            if !seen.insert(d.id) {
                return Err(MonitoringError::Config(format!(
                    "seed_devices contains duplicate id: {}",
                    d.id
                )));
            }
        }

        Ok(())
    }

    /// Seed records as registry devices, in declaration order.
    pub fn seeds(&self) -> Vec<Device> {
        self.seed_devices.iter().map(Device::from).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_api_listen")]
    pub api_listen: String,

    #[serde(default = "default_metrics_listen")]
    pub metrics_listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            api_listen: default_api_listen(),
            metrics_listen: default_metrics_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        let api = self.api_addr()?;
        let metrics = self.metrics_addr()?;
        if api == metrics {
            return Err(MonitoringError::Config(
                "server.api_listen and server.metrics_listen must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn api_addr(&self) -> Result<SocketAddr> {
        parse_addr("server.api_listen", &self.api_listen)
    }

    pub fn metrics_addr(&self) -> Result<SocketAddr> {
        parse_addr("server.metrics_listen", &self.metrics_listen)
    }
}

fn parse_addr(field: &str, raw: &str) -> Result<SocketAddr> {
    raw.parse()
        .map_err(|e| MonitoringError::Config(format!("{field} must be a valid SocketAddr ({raw}): {e}")))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: default_app_version(),
        }
    }
}

impl AppSection {
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(MonitoringError::Config("app.version must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedDevice {
    pub id: i64,
    pub mac: String,
    pub firmware: String,
}

impl From<&SeedDevice> for Device {
    fn from(s: &SeedDevice) -> Self {
        Device::new(s.id, s.mac.clone(), s.firmware.clone())
    }
}

fn default_api_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metrics_listen() -> String {
    "0.0.0.0:8081".into()
}
fn default_app_version() -> String {
    "1.0.0".into()
}

fn default_seed_devices() -> Vec<SeedDevice> {
    vec![
        SeedDevice {
            id: 1,
            mac: "65:D0:E8:1A:26:EA".into(),
            firmware: "2.1.6".into(),
        },
        SeedDevice {
            id: 2,
            mac: "65:D0:E9:2A:44:EB".into(),
            firmware: "1.1.2".into(),
        },
    ]
}
