use crate::error::Result;
use crate::models::interface::{Interface, InterfaceChanges};
use crate::models::routing::{RouterData, RoutingProtocol, StaticRoute};
use crate::models::switching::{SwitchData, Vlan};
use crate::models::value::{ConfigMap, ConfigValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

fn default_unknown() -> String {
    "Unknown".to_string()
}

/// The closed set of device categories.
///
/// Serialized with the wire tags used by the inventory file format;
/// unrecognized or missing tags fall back to [`DeviceType::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    #[default]
    Generic,
    Router,
    Switch,
}

impl DeviceType {
    /// The wire tag for this category
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Generic => "NetworkDevice",
            DeviceType::Router => "Router",
            DeviceType::Switch => "Switch",
        }
    }

    /// Parses a wire tag; anything unrecognized is the base category
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Router" => DeviceType::Router,
            "Switch" => DeviceType::Switch,
            _ => DeviceType::Generic,
        }
    }
}

impl From<String> for DeviceType {
    fn from(tag: String) -> Self {
        DeviceType::from_tag(&tag)
    }
}

impl From<DeviceType> for String {
    fn from(device_type: DeviceType) -> Self {
        device_type.as_str().to_string()
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific device data, carried as a tagged variant.
///
/// The variant is kept consistent with [`Device::device_type`] by the
/// constructors and by [`Device::from_value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeviceExtension {
    #[default]
    Generic,
    Router(RouterData),
    Switch(SwitchData),
}

impl DeviceExtension {
    fn for_type(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Generic => DeviceExtension::Generic,
            DeviceType::Router => DeviceExtension::Router(RouterData::default()),
            DeviceType::Switch => DeviceExtension::Switch(SwitchData::default()),
        }
    }
}

/// One managed network device.
///
/// The hostname is the sole lookup key within an [`InventoryStore`]; it must
/// be unique there (last write wins on duplicates).
///
/// [`InventoryStore`]: crate::store::InventoryStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub hostname: String,
    pub ip_address: String,
    #[serde(default)]
    pub device_type: DeviceType,
    #[serde(default = "default_unknown")]
    pub vendor: String,
    #[serde(default = "default_unknown")]
    pub model: String,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub configuration: ConfigMap,
    #[serde(default)]
    pub last_backup: Option<DateTime<Utc>>,
    #[serde(default = "default_unknown")]
    pub status: String,
    /// Category-specific fields; merged at the top level on serialization
    #[serde(skip)]
    pub extension: DeviceExtension,
}

impl Device {
    /// Creates a device of the given category with an empty matching extension
    pub fn new(
        hostname: impl Into<String>,
        ip_address: impl Into<String>,
        device_type: DeviceType,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            ip_address: ip_address.into(),
            device_type,
            vendor: default_unknown(),
            model: default_unknown(),
            interfaces: Vec::new(),
            configuration: ConfigMap::new(),
            last_backup: None,
            status: default_unknown(),
            extension: DeviceExtension::for_type(device_type),
        }
    }

    /// Creates a base (generic) device
    pub fn generic(hostname: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self::new(hostname, ip_address, DeviceType::Generic)
    }

    /// Creates a router
    pub fn router(hostname: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self::new(hostname, ip_address, DeviceType::Router)
    }

    /// Creates a switch
    pub fn switch(hostname: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self::new(hostname, ip_address, DeviceType::Switch)
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Appends a new interface and returns a reference to it.
    ///
    /// Duplicate names are permitted; lookups return the first match.
    pub fn add_interface(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        vlan: Option<u16>,
        ip_address: impl Into<String>,
    ) -> &Interface {
        let index = self.interfaces.len();
        self.interfaces
            .push(Interface::new(name, description, vlan, ip_address));
        &self.interfaces[index]
    }

    /// Finds an interface by name (first match)
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|intf| intf.name == name)
    }

    /// Merges the supplied fields into the named interface.
    ///
    /// Returns `false` without mutating anything when no interface with that
    /// name exists; a miss never creates one.
    pub fn configure_interface(&mut self, name: &str, changes: &InterfaceChanges) -> bool {
        match self.interfaces.iter_mut().find(|intf| intf.name == name) {
            Some(interface) => {
                changes.apply(interface);
                true
            }
            None => false,
        }
    }

    /// Sets a configuration parameter
    pub fn set_configuration(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.configuration.insert(key.into(), value.into());
    }

    /// Reads a configuration parameter
    #[must_use]
    pub fn get_configuration(&self, key: &str) -> Option<&ConfigValue> {
        self.configuration.get(key)
    }

    /// Stamps the device with the current time as its last backup
    pub fn mark_backed_up(&mut self) {
        self.last_backup = Some(Utc::now());
    }

    /// Router-specific data, when this device is a router
    #[must_use]
    pub fn router_data(&self) -> Option<&RouterData> {
        match &self.extension {
            DeviceExtension::Router(data) => Some(data),
            _ => None,
        }
    }

    /// Switch-specific data, when this device is a switch
    #[must_use]
    pub fn switch_data(&self) -> Option<&SwitchData> {
        match &self.extension {
            DeviceExtension::Switch(data) => Some(data),
            _ => None,
        }
    }

    /// Adds a routing protocol configuration.
    ///
    /// Returns `false` when the device is not a router.
    pub fn add_routing_protocol(
        &mut self,
        protocol: impl Into<String>,
        process_id: Option<u32>,
        config: ConfigMap,
    ) -> bool {
        match &mut self.extension {
            DeviceExtension::Router(data) => {
                let mut entry = RoutingProtocol::new(protocol, process_id);
                entry.config = config;
                data.routing_protocols.push(entry);
                true
            }
            _ => false,
        }
    }

    /// Adds a static route. Returns `false` when the device is not a router.
    pub fn add_static_route(
        &mut self,
        destination: impl Into<String>,
        next_hop: impl Into<String>,
        metric: u32,
    ) -> bool {
        match &mut self.extension {
            DeviceExtension::Router(data) => {
                data.static_routes
                    .push(StaticRoute::new(destination, next_hop, metric));
                true
            }
            _ => false,
        }
    }

    /// Adds a VLAN definition. Returns `false` when the device is not a switch.
    pub fn add_vlan(
        &mut self,
        id: u16,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        match &mut self.extension {
            DeviceExtension::Switch(data) => {
                data.vlans.push(Vlan::new(id, name, description));
                true
            }
            _ => false,
        }
    }

    /// Configures a switch port, creating the interface when it is missing.
    ///
    /// Returns `false` when the device is not a switch.
    pub fn configure_port(
        &mut self,
        name: &str,
        mode: impl Into<String>,
        vlan: u16,
        allowed_vlans: Vec<u16>,
    ) -> bool {
        if !matches!(self.extension, DeviceExtension::Switch(_)) {
            return false;
        }

        let position = match self.interfaces.iter().position(|intf| intf.name == name) {
            Some(position) => position,
            None => {
                self.interfaces.push(Interface::new(name, "", None, ""));
                self.interfaces.len() - 1
            }
        };
        let interface = &mut self.interfaces[position];
        interface.mode = Some(mode.into());
        interface.vlan = Some(vlan);
        interface.allowed_vlans = Some(allowed_vlans);
        true
    }

    /// Serializes the device to a plain nested map.
    ///
    /// Category-specific fields are merged at the same level as the base
    /// fields, so routers carry `routing_protocols`/`static_routes` and
    /// switches carry `vlans`/`spanning_tree_config` alongside `hostname`.
    pub fn to_value(&self) -> Result<Value> {
        let mut value = serde_json::to_value(self)?;
        let extension = match &self.extension {
            DeviceExtension::Generic => None,
            DeviceExtension::Router(data) => Some(serde_json::to_value(data)?),
            DeviceExtension::Switch(data) => Some(serde_json::to_value(data)?),
        };

        if let (Some(Value::Object(extra)), Value::Object(base)) = (extension, &mut value) {
            for (key, field) in extra {
                base.insert(key, field);
            }
        }
        Ok(value)
    }

    /// Reconstructs a device from its serialized map.
    ///
    /// The concrete category is chosen from the `device_type` tag; an
    /// unrecognized tag yields a base device. Category-specific lists default
    /// to empty when absent.
    pub fn from_value(value: &Value) -> Result<Device> {
        let mut device: Device = serde_json::from_value(value.clone())?;
        device.extension = match device.device_type {
            DeviceType::Generic => DeviceExtension::Generic,
            DeviceType::Router => {
                DeviceExtension::Router(serde_json::from_value(value.clone())?)
            }
            DeviceType::Switch => {
                DeviceExtension::Switch(serde_json::from_value(value.clone())?)
            }
        };
        Ok(device)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.device_type, self.hostname, self.ip_address)
    }
}
