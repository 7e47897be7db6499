//! Facade tying the store, serializers, and backup orchestrator to the
//! on-disk data directory layout.

use crate::backup::{BackupOrchestrator, BackupReport};
use crate::config::ManagerConfig;
use crate::error::{InventoryErrorExt, NetvaultError, Result};
use crate::export::{CsvExporter, CsvImportSummary, CsvImporter, JsonExporter, JsonImporter, XmlExporter};
use crate::models::Device;
use crate::stats::InventoryStatistics;
use crate::store::{DeviceFilter, InventoryStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

pub struct InventoryManager {
    config: ManagerConfig,
    store: InventoryStore,
}

impl InventoryManager {
    /// Creates a manager and its data directory layout
    /// (`configs/`, `backups/`, `reports/` under the data directory).
    pub fn new(config: ManagerConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_directory)?;
        fs::create_dir_all(config.configs_dir())?;
        fs::create_dir_all(config.backups_dir())?;
        fs::create_dir_all(config.reports_dir())?;

        Ok(Self {
            config,
            store: InventoryStore::new(),
        })
    }

    /// Creates a manager rooted at the given data directory
    pub fn with_data_directory(data_directory: impl Into<PathBuf>) -> Result<Self> {
        Self::new(ManagerConfig::with_data_directory(data_directory))
    }

    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InventoryStore {
        &mut self.store
    }

    /// Adds a device, silently replacing any entry with the same hostname
    pub fn add_device(&mut self, device: Device) -> Option<Device> {
        self.store.add(device)
    }

    #[must_use]
    pub fn device(&self, hostname: &str) -> Option<&Device> {
        self.store.get(hostname)
    }

    pub fn remove_device(&mut self, hostname: &str) -> bool {
        self.store.remove(hostname)
    }

    #[must_use]
    pub fn list_devices(&self, filter: &DeviceFilter) -> Vec<&Device> {
        self.store.list(filter)
    }

    /// Writes the full inventory as JSON into the data directory
    pub fn save_inventory_json(&self, filename: &str) -> Result<PathBuf> {
        let path = self.config.data_directory.join(filename);
        JsonExporter::new().export_to_file(&self.store, &path)?;
        Ok(path)
    }

    /// Replaces the inventory from a JSON file in the data directory.
    ///
    /// The current inventory is kept intact when the file is missing or
    /// malformed. Returns the number of devices loaded.
    pub fn load_inventory_json(&mut self, filename: &str) -> Result<usize> {
        let path = self.config.data_directory.join(filename);
        JsonImporter::new().import_file(&mut self.store, &path)
    }

    /// Writes the CSV device report into the reports directory
    pub fn export_csv_report(&self, filename: &str) -> Result<PathBuf> {
        let path = self.config.reports_dir().join(filename);
        CsvExporter::new().export_to_file(&self.store, &path)?;
        Ok(path)
    }

    /// Imports devices from a CSV file at an arbitrary path, adding to
    /// (not replacing) the current inventory
    pub fn import_csv_devices(&mut self, path: &Path) -> Result<CsvImportSummary> {
        CsvImporter::new().import_file(&mut self.store, path)
    }

    /// Generates the XML configuration file for one device into the configs
    /// directory. Fails with a not-found error when the hostname is absent.
    pub fn generate_device_config(&self, hostname: &str) -> Result<PathBuf> {
        let device = self
            .store
            .get(hostname)
            .ok_or_else(|| NetvaultError::device_not_found(hostname))?;

        let path = self
            .config
            .configs_dir()
            .join(format!("{hostname}_config.xml"));
        XmlExporter::new().export_to_file(device, &path)?;
        Ok(path)
    }

    /// Backs up every device into the backups directory and writes the
    /// backup report into the reports directory.
    ///
    /// A failure to write the report is logged and does not affect the
    /// per-device results.
    pub fn backup_all(&mut self) -> BackupReport {
        let orchestrator = BackupOrchestrator::new(self.config.backups_dir());
        let report = orchestrator.backup_all(&mut self.store);

        if let Err(err) = orchestrator.write_report(&report, &self.config.reports_dir()) {
            error!(error = %err, "failed to write backup report");
        }
        report
    }

    /// Summary counters over the current inventory
    #[must_use]
    pub fn statistics(&self) -> InventoryStatistics {
        InventoryStatistics::collect(&self.store)
    }
}
