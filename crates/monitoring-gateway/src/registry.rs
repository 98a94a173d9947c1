//! In-memory device registry.
//!
//! Insertion order is preserved and nothing here checks `id` uniqueness:
//! `append` always succeeds and `update_firmware` touches every match.
//! Callers that need uniqueness check `contains` first (see `Fleet`).
//! The registry has no interior locking; it is owned by `Fleet`, which
//! guards it with a single mutex.

use monitoring_core::Device;

#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self { devices: Vec::new() }
    }

    pub fn with_seeds(seeds: Vec<Device>) -> Self {
        Self { devices: seeds }
    }

    /// Current contents, in insertion order.
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn append(&mut self, d: Device) {
        self.devices.push(d);
    }

    /// Overwrite `firmware` on every record with this `id`.
    /// Returns how many records matched (0 = none).
    pub fn update_firmware(&mut self, id: i64, firmware: &str) -> usize {
        let mut matched = 0;
        for d in self.devices.iter_mut().filter(|d| d.id == id) {
            d.firmware = firmware.to_string();
            matched += 1;
        }
        matched
    }

    pub fn contains(&self, id: i64) -> bool {
        self.devices.iter().any(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
