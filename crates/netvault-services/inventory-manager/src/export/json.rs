use crate::error::{InventoryErrorExt, NetvaultError, Result};
use crate::models::Device;
use crate::store::InventoryStore;
use chrono::Utc;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Version tag written into the `metadata` block of every inventory document
pub const FORMAT_VERSION: &str = "1.0";

/// Writes the whole inventory as one JSON document:
/// export metadata plus a hostname-to-device mapping.
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, store: &InventoryStore) -> Result<String> {
        let mut devices = serde_json::Map::new();
        for device in store.iter() {
            devices.insert(device.hostname.clone(), device.to_value()?);
        }

        let document = json!({
            "metadata": {
                "export_date": Utc::now().to_rfc3339(),
                "total_devices": store.len(),
                "format_version": FORMAT_VERSION,
            },
            "devices": devices,
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn export_to_file(&self, store: &InventoryStore, path: &Path) -> Result<()> {
        let document = self.export(store)?;
        fs::write(path, document)?;
        Ok(())
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an inventory document back into a store.
///
/// The import is all-or-nothing at the top level: the store is only cleared
/// after the document has been read and every device has parsed, so a missing
/// file or malformed JSON leaves the current inventory untouched.
pub struct JsonImporter;

impl JsonImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn import_str(&self, store: &mut InventoryStore, data: &str) -> Result<usize> {
        let document: Value = serde_json::from_str(data)?;

        let devices = document
            .get("devices")
            .and_then(Value::as_object)
            .ok_or_else(|| NetvaultError::import_error("missing 'devices' object"))?;

        let mut parsed = Vec::with_capacity(devices.len());
        for value in devices.values() {
            parsed.push(Device::from_value(value)?);
        }

        store.clear();
        for device in parsed {
            store.add(device);
        }
        Ok(store.len())
    }

    pub fn import_file(&self, store: &mut InventoryStore, path: &Path) -> Result<usize> {
        let data = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                NetvaultError::inventory_file_not_found(path.display().to_string())
            } else {
                NetvaultError::Io(err)
            }
        })?;
        self.import_str(store, &data)
    }
}

impl Default for JsonImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfigMap, DeviceType};

    fn sample_store() -> InventoryStore {
        let mut store = InventoryStore::new();

        let mut router = Device::router("core-router-01", "10.0.0.1")
            .with_vendor("Cisco")
            .with_model("ISR 4331")
            .with_status("Active");
        router.add_interface("GigabitEthernet0/0", "WAN to ISP", None, "203.0.113.10");
        router.add_routing_protocol("OSPF", Some(1), ConfigMap::new());
        router.add_static_route("0.0.0.0/0", "203.0.113.9", 1);
        store.add(router);

        let mut switch = Device::switch("core-switch-01", "10.0.0.10")
            .with_vendor("Cisco")
            .with_model("Catalyst 3850")
            .with_status("Active");
        switch.add_vlan(10, "Data", "User data network");
        switch.add_vlan(20, "Voice", "VoIP network");
        store.add(switch);

        store
    }

    #[test]
    fn test_export_document_shape() {
        let store = sample_store();
        let document = JsonExporter::new().export(&store).unwrap();

        let value: Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value["metadata"]["total_devices"], 2);
        assert_eq!(value["metadata"]["format_version"], FORMAT_VERSION);
        assert_eq!(
            value["devices"]["core-router-01"]["device_type"],
            "Router"
        );
        // Extension fields sit at the same level as the base fields
        assert!(value["devices"]["core-switch-01"]["vlans"].is_array());
    }

    #[test]
    fn test_round_trip_reproduces_devices() {
        let store = sample_store();
        let document = JsonExporter::new().export(&store).unwrap();

        let mut restored = InventoryStore::new();
        let count = JsonImporter::new()
            .import_str(&mut restored, &document)
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            restored.get("core-router-01"),
            store.get("core-router-01")
        );
        assert_eq!(
            restored.get("core-switch-01"),
            store.get("core-switch-01")
        );
    }

    #[test]
    fn test_import_replaces_existing_devices() {
        let store = sample_store();
        let document = JsonExporter::new().export(&store).unwrap();

        let mut target = InventoryStore::new();
        target.add(Device::generic("stale-device", "192.0.2.1"));

        JsonImporter::new().import_str(&mut target, &document).unwrap();
        assert!(target.get("stale-device").is_none());
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_parse_failure_leaves_store_unmodified() {
        let mut store = sample_store();
        let result = JsonImporter::new().import_str(&mut store, "{not json");

        assert!(matches!(result, Err(NetvaultError::Parse(_))));
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get("core-router-01").unwrap().device_type,
            DeviceType::Router
        );
    }

    #[test]
    fn test_import_device_without_type_tag_is_generic() {
        let document = r#"{"devices": {"d1": {"hostname": "d1", "ip_address": "10.0.0.1"}}}"#;

        let mut store = InventoryStore::new();
        let count = JsonImporter::new().import_str(&mut store, document).unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.get("d1").unwrap().device_type, DeviceType::Generic);
    }

    #[test]
    fn test_missing_devices_object_is_an_error() {
        let mut store = sample_store();
        let result = JsonImporter::new().import_str(&mut store, r#"{"metadata": {}}"#);

        assert!(result.is_err());
        assert_eq!(store.len(), 2);
    }
}
