use crate::models::value::ConfigMap;
use serde::{Deserialize, Serialize};

/// Switch-specific device data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchData {
    #[serde(default)]
    pub vlans: Vec<Vlan>,
    #[serde(default)]
    pub spanning_tree_config: ConfigMap,
}

/// A VLAN definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vlan {
    pub id: u16,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Vlan {
    pub fn new(id: u16, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
