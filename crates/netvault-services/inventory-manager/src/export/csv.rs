use crate::error::{InventoryErrorExt, NetvaultError, Result};
use crate::models::{Device, DeviceType};
use crate::store::InventoryStore;
use csv::{Reader, StringRecord, Writer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// The fixed column set of the device report format
pub const CSV_HEADERS: [&str; 9] = [
    "Hostname",
    "IP_Address",
    "Device_Type",
    "Vendor",
    "Model",
    "Interface_Count",
    "Status",
    "Last_Backup",
    "Configuration_Items",
];

/// Writes one row per device with the fixed column set.
///
/// Lossy: interfaces, configuration entries, and category-specific fields
/// are reduced to counts and are not round-tripped.
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, store: &InventoryStore) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record(CSV_HEADERS)?;

        for device in store.iter() {
            wtr.write_record([
                device.hostname.clone(),
                device.ip_address.clone(),
                device.device_type.as_str().to_string(),
                device.vendor.clone(),
                device.model.clone(),
                device.interfaces.len().to_string(),
                device.status.clone(),
                device
                    .last_backup
                    .map(|stamp| stamp.to_rfc3339())
                    .unwrap_or_else(|| "Never".to_string()),
                device.configuration.len().to_string(),
            ])?;
        }

        let data = wtr
            .into_inner()
            .map_err(|err| NetvaultError::export_error(format!("CSV writer error: {err}")))?;
        String::from_utf8(data)
            .map_err(|err| NetvaultError::export_error(format!("UTF-8 conversion error: {err}")))
    }

    pub fn export_to_file(&self, store: &InventoryStore, path: &Path) -> Result<()> {
        let report = self.export(store)?;
        fs::write(path, report)?;
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a CSV import pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Reads device rows keyed by the fixed column header set.
///
/// Rows missing a hostname or IP address are skipped with a warning, not an
/// error. Imported devices are added to the store without clearing it.
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn import_str(&self, store: &mut InventoryStore, data: &str) -> Result<CsvImportSummary> {
        let mut reader = Reader::from_reader(data.as_bytes());
        let headers = reader.headers()?.clone();

        let mut summary = CsvImportSummary::default();
        for (index, result) in reader.records().enumerate() {
            let record = result?;

            let hostname = field(&headers, &record, "Hostname");
            let ip_address = field(&headers, &record, "IP_Address");
            if hostname.is_empty() || ip_address.is_empty() {
                warn!(
                    row = index + 1,
                    "skipping CSV row with missing hostname or IP address"
                );
                summary.skipped += 1;
                continue;
            }

            let device_type = DeviceType::from_tag(field(&headers, &record, "Device_Type"));
            let mut device = Device::new(hostname, ip_address, device_type)
                .with_vendor(non_empty_or(field(&headers, &record, "Vendor"), "Unknown"))
                .with_model(non_empty_or(field(&headers, &record, "Model"), "Unknown"));
            device.status = non_empty_or(field(&headers, &record, "Status"), "Unknown");

            store.add(device);
            summary.imported += 1;
        }
        Ok(summary)
    }

    pub fn import_file(
        &self,
        store: &mut InventoryStore,
        path: &Path,
    ) -> Result<CsvImportSummary> {
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

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'a>(headers: &StringRecord, record: &'a StringRecord, name: &str) -> &'a str {
    headers
        .iter()
        .position(|header| header == name)
        .and_then(|index| record.get(index))
        .unwrap_or("")
        .trim()
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
