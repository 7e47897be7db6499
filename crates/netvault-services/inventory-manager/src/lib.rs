//! Network device inventory management with multi-format export and batch
//! configuration backup.

pub mod backup;
pub mod config;
pub mod error;
pub mod export;
pub mod manager;
pub mod models;
pub mod stats;
pub mod store;

pub use config::ManagerConfig;
pub use error::{InventoryErrorExt, NetvaultError, Result};
pub use manager::InventoryManager;
pub use store::{DeviceFilter, InventoryStore};
