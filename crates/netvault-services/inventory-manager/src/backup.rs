//! Best-effort batch backup of every device in the inventory.
//!
//! Each pass stamps a device, writes its XML configuration, and records the
//! outcome; one failing device never aborts the batch. Repeat passes
//! overwrite earlier stamps and output files.

use crate::error::{InventoryErrorExt, NetvaultError, Result};
use crate::export::XmlExporter;
use crate::store::InventoryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Per-pass backup outcome.
///
/// Failed entries carry the error description as `"hostname: error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupReport {
    pub successful: Vec<String>,
    pub failed: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl BackupReport {
    fn new() -> Self {
        Self {
            successful: Vec::new(),
            failed: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Iterates the inventory, stamps each device, and writes its configuration
pub struct BackupOrchestrator {
    output_dir: PathBuf,
    exporter: XmlExporter,
}

impl BackupOrchestrator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            exporter: XmlExporter::new(),
        }
    }

    /// Backs up every device in insertion order.
    ///
    /// Per-device failures are recorded in the report and the loop continues.
    pub fn backup_all(&self, store: &mut InventoryStore) -> BackupReport {
        let mut report = BackupReport::new();

        let hostnames: Vec<String> = store.hostnames().map(str::to_owned).collect();
        for hostname in hostnames {
            match self.backup_device(store, &hostname) {
                Ok(path) => {
                    info!(hostname = %hostname, path = %path.display(), "device backed up");
                    report.successful.push(hostname);
                }
                Err(err) => {
                    warn!(hostname = %hostname, error = %err, "device backup failed");
                    report.failed.push(format!("{hostname}: {err}"));
                }
            }
        }
        report
    }

    fn backup_device(&self, store: &mut InventoryStore, hostname: &str) -> Result<PathBuf> {
        let device = store
            .get_mut(hostname)
            .ok_or_else(|| NetvaultError::device_not_found(hostname))?;
        device.mark_backed_up();

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{hostname}_config.xml"));
        self.exporter.export_to_file(device, &path)?;
        Ok(path)
    }

    /// Serializes the report to `backup_report_<timestamp>.json` under the
    /// given directory. A write failure here does not affect the per-device
    /// results already collected; callers log it separately.
    pub fn write_report(&self, report: &BackupReport, reports_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(reports_dir)?;
        let filename = format!(
            "backup_report_{}.json",
            report.timestamp.format("%Y%m%d_%H%M%S")
        );
        let path = reports_dir.join(filename);
        let document = serde_json::to_string_pretty(report)?;
        fs::write(&path, document)?;
        Ok(path)
    }
}
