//! In-memory device inventory keyed by hostname.
//!
//! Insertion order is preserved so exports and backup passes are
//! deterministic per run. The store is single-threaded by design; exclusive
//! mutation is enforced through `&mut` receivers.

use crate::models::{Device, DeviceType};
use indexmap::IndexMap;

/// The in-memory collection of devices, keyed by hostname
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    devices: IndexMap<String, Device>,
}

impl InventoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device under its hostname, silently replacing any existing
    /// entry with the same hostname. Returns the replaced device, if any.
    pub fn add(&mut self, device: Device) -> Option<Device> {
        self.devices.insert(device.hostname.clone(), device)
    }

    /// Looks up a device by hostname
    #[must_use]
    pub fn get(&self, hostname: &str) -> Option<&Device> {
        self.devices.get(hostname)
    }

    /// Looks up a device by hostname for mutation
    pub fn get_mut(&mut self, hostname: &str) -> Option<&mut Device> {
        self.devices.get_mut(hostname)
    }

    /// Removes a device; `true` if an entry existed and was removed
    pub fn remove(&mut self, hostname: &str) -> bool {
        self.devices.shift_remove(hostname).is_some()
    }

    /// Removes every device
    pub fn clear(&mut self) {
        self.devices.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    /// Hostnames in insertion order
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    /// Devices matching every supplied filter (logical AND).
    ///
    /// An empty filter matches all devices.
    #[must_use]
    pub fn list(&self, filter: &DeviceFilter) -> Vec<&Device> {
        self.devices
            .values()
            .filter(|device| filter.matches(device))
            .collect()
    }
}

/// Optional device-type/vendor/status criteria combined with logical AND
#[derive(Debug, Clone, Default)]
pub struct DeviceFilter {
    device_type: Option<DeviceType>,
    vendor: Option<String>,
    status: Option<String>,
}

impl DeviceFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }

    #[must_use]
    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn matches(&self, device: &Device) -> bool {
        if let Some(device_type) = self.device_type {
            if device.device_type != device_type {
                return false;
            }
        }
        if let Some(vendor) = &self.vendor {
            if &device.vendor != vendor {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if &device.status != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add(
            Device::router("core-router-01", "10.0.0.1")
                .with_vendor("Cisco")
                .with_status("Active"),
        );
        store.add(
            Device::switch("core-switch-01", "10.0.0.10")
                .with_vendor("Cisco")
                .with_status("Active"),
        );
        store.add(
            Device::switch("lab-switch-01", "10.9.0.10")
                .with_vendor("Juniper")
                .with_status("Maintenance"),
        );
        store
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let mut store = InventoryStore::new();
        let mut device = Device::router("r1", "10.0.0.1").with_vendor("Cisco");
        device.add_interface("Gi0/0", "WAN", None, "203.0.113.10");
        device.set_configuration("domain_name", "company.local");

        store.add(device.clone());
        assert_eq!(store.get("r1"), Some(&device));
    }

    #[test]
    fn test_add_replaces_silently() {
        let mut store = InventoryStore::new();
        store.add(Device::router("r1", "10.0.0.1"));
        let replaced = store.add(Device::switch("r1", "10.0.0.2"));

        assert!(replaced.is_some());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("r1").unwrap().device_type, DeviceType::Switch);
    }

    #[test]
    fn test_remove() {
        let mut store = sample_store();
        assert!(store.remove("lab-switch-01"));
        assert!(!store.remove("lab-switch-01"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let store = sample_store();
        let hostnames: Vec<&str> = store.hostnames().collect();
        assert_eq!(
            hostnames,
            vec!["core-router-01", "core-switch-01", "lab-switch-01"]
        );
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let store = sample_store();
        assert_eq!(store.list(&DeviceFilter::new()).len(), 3);
    }

    #[test]
    fn test_single_filters() {
        let store = sample_store();

        let routers = store.list(&DeviceFilter::new().device_type(DeviceType::Router));
        assert_eq!(routers.len(), 1);
        assert_eq!(routers[0].hostname, "core-router-01");

        let cisco = store.list(&DeviceFilter::new().vendor("Cisco"));
        assert_eq!(cisco.len(), 2);

        let maintenance = store.list(&DeviceFilter::new().status("Maintenance"));
        assert_eq!(maintenance.len(), 1);
    }

    #[test]
    fn test_combined_filters_are_logical_and() {
        let store = sample_store();

        let cisco_switches = store.list(
            &DeviceFilter::new()
                .device_type(DeviceType::Switch)
                .vendor("Cisco"),
        );
        assert_eq!(cisco_switches.len(), 1);
        assert_eq!(cisco_switches[0].hostname, "core-switch-01");

        let juniper_routers = store.list(
            &DeviceFilter::new()
                .device_type(DeviceType::Router)
                .vendor("Juniper"),
        );
        assert!(juniper_routers.is_empty());
    }
}
