//! Error handling for the inventory manager.

pub use netvault_error::{NetvaultError, Result};

/// Extension trait for inventory-specific error construction
pub trait InventoryErrorExt {
    /// Creates a missing-device error
    fn device_not_found(hostname: impl Into<String>) -> NetvaultError {
        NetvaultError::not_found("device", hostname)
    }

    /// Creates a missing-inventory-file error
    fn inventory_file_not_found(path: impl Into<String>) -> NetvaultError {
        NetvaultError::not_found("inventory file", path)
    }

    /// Creates an export error
    fn export_error(reason: impl Into<String>) -> NetvaultError {
        NetvaultError::internal(format!("Export failed: {}", reason.into()))
    }

    /// Creates an import error
    fn import_error(reason: impl Into<String>) -> NetvaultError {
        NetvaultError::parse(format!("Import failed: {}", reason.into()))
    }

    /// Creates a backup error
    fn backup_error(reason: impl Into<String>) -> NetvaultError {
        NetvaultError::backup(reason)
    }
}

impl InventoryErrorExt for NetvaultError {}
