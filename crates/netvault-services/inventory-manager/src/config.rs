use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Root directory for all inventory data files
    pub data_directory: PathBuf,
    /// Subdirectory for generated device configuration files
    pub configs_subdir: String,
    /// Subdirectory for backup configuration output
    pub backups_subdir: String,
    /// Subdirectory for CSV and backup reports
    pub reports_subdir: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            data_directory: std::env::var("NETVAULT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("network_data")),
            configs_subdir: "configs".to_string(),
            backups_subdir: "backups".to_string(),
            reports_subdir: "reports".to_string(),
        }
    }
}

impl ManagerConfig {
    /// Creates a config rooted at the given data directory
    pub fn with_data_directory(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            ..Self::default()
        }
    }

    /// Directory for generated device configuration files
    #[must_use]
    pub fn configs_dir(&self) -> PathBuf {
        self.data_directory.join(&self.configs_subdir)
    }

    /// Directory for backup output
    #[must_use]
    pub fn backups_dir(&self) -> PathBuf {
        self.data_directory.join(&self.backups_subdir)
    }

    /// Directory for reports
    #[must_use]
    pub fn reports_dir(&self) -> PathBuf {
        self.data_directory.join(&self.reports_subdir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ManagerConfig::default();
        assert_eq!(config.configs_subdir, "configs");
        assert_eq!(config.backups_subdir, "backups");
        assert_eq!(config.reports_subdir, "reports");
    }

    #[test]
    fn test_subdirectory_paths() {
        let config = ManagerConfig::with_data_directory("/tmp/netvault");
        assert_eq!(config.configs_dir(), PathBuf::from("/tmp/netvault/configs"));
        assert_eq!(config.reports_dir(), PathBuf::from("/tmp/netvault/reports"));
    }
}
