use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "down".to_string()
}

/// A network interface owned by exactly one device.
///
/// Interfaces are created through [`Device::add_interface`] and mutated by
/// name lookup; they are never persisted independently of their device.
///
/// [`Device::add_interface`]: crate::models::Device::add_interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vlan: Option<u16>,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_status")]
    pub status: String,
    /// Switch port mode (access/trunk), set via `configure_port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// VLANs allowed on a trunk port, set via `configure_port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_vlans: Option<Vec<u16>>,
}

impl Interface {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        vlan: Option<u16>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            vlan,
            ip_address: ip_address.into(),
            enabled: false,
            status: default_status(),
            mode: None,
            allowed_vlans: None,
        }
    }
}

/// A partial update applied to an existing interface.
///
/// Only supplied fields are merged; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct InterfaceChanges {
    pub description: Option<String>,
    pub vlan: Option<u16>,
    pub ip_address: Option<String>,
    pub enabled: Option<bool>,
    pub status: Option<String>,
}

impl InterfaceChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn vlan(mut self, vlan: u16) -> Self {
        self.vlan = Some(vlan);
        self
    }

    #[must_use]
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub(crate) fn apply(&self, interface: &mut Interface) {
        if let Some(description) = &self.description {
            interface.description = description.clone();
        }
        if let Some(vlan) = self.vlan {
            interface.vlan = Some(vlan);
        }
        if let Some(ip_address) = &self.ip_address {
            interface.ip_address = ip_address.clone();
        }
        if let Some(enabled) = self.enabled {
            interface.enabled = enabled;
        }
        if let Some(status) = &self.status {
            interface.status = status.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interface_defaults() {
        let intf = Interface::new("GigabitEthernet0/0", "WAN uplink", None, "");
        assert_eq!(intf.status, "down");
        assert!(!intf.enabled);
        assert!(intf.vlan.is_none());
    }

    #[test]
    fn test_changes_merge_only_supplied_fields() {
        let mut intf = Interface::new("Gi0/1", "LAN", Some(10), "192.168.1.1");
        InterfaceChanges::new()
            .enabled(true)
            .status("up")
            .apply(&mut intf);

        assert!(intf.enabled);
        assert_eq!(intf.status, "up");
        // Untouched fields keep their values
        assert_eq!(intf.description, "LAN");
        assert_eq!(intf.vlan, Some(10));
    }
}
