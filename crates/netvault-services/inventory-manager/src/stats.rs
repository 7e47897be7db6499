use crate::store::InventoryStore;
use indexmap::IndexMap;
use serde::Serialize;

/// Inventory summary counters, suitable for report output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStatistics {
    pub total_devices: usize,
    pub by_type: IndexMap<String, usize>,
    pub by_vendor: IndexMap<String, usize>,
    pub by_status: IndexMap<String, usize>,
    pub total_interfaces: usize,
    pub backed_up: usize,
    pub never_backed_up: usize,
}

impl InventoryStatistics {
    #[must_use]
    pub fn collect(store: &InventoryStore) -> Self {
        let mut stats = Self::default();

        for device in store.iter() {
            stats.total_devices += 1;
            *stats
                .by_type
                .entry(device.device_type.as_str().to_string())
                .or_insert(0) += 1;
            *stats.by_vendor.entry(device.vendor.clone()).or_insert(0) += 1;
            *stats.by_status.entry(device.status.clone()).or_insert(0) += 1;
            stats.total_interfaces += device.interfaces.len();

            if device.last_backup.is_some() {
                stats.backed_up += 1;
            } else {
                stats.never_backed_up += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Device;

    #[test]
    fn test_collect() {
        let mut store = InventoryStore::new();

        let mut router = Device::router("r1", "10.0.0.1")
            .with_vendor("Cisco")
            .with_status("Active");
        router.add_interface("Gi0/0", "", None, "");
        router.add_interface("Gi0/1", "", None, "");
        router.mark_backed_up();
        store.add(router);

        store.add(
            Device::switch("s1", "10.0.0.2")
                .with_vendor("Cisco")
                .with_status("Active"),
        );
        store.add(
            Device::generic("d1", "10.0.0.3")
                .with_vendor("Juniper")
                .with_status("Offline"),
        );

        let stats = InventoryStatistics::collect(&store);
        assert_eq!(stats.total_devices, 3);
        assert_eq!(stats.by_type["Router"], 1);
        assert_eq!(stats.by_type["Switch"], 1);
        assert_eq!(stats.by_type["NetworkDevice"], 1);
        assert_eq!(stats.by_vendor["Cisco"], 2);
        assert_eq!(stats.by_status["Offline"], 1);
        assert_eq!(stats.total_interfaces, 2);
        assert_eq!(stats.backed_up, 1);
        assert_eq!(stats.never_backed_up, 2);
    }

    #[test]
    fn test_empty_store() {
        let stats = InventoryStatistics::collect(&InventoryStore::new());
        assert_eq!(stats, InventoryStatistics::default());
    }
}
