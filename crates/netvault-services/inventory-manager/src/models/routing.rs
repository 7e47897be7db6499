use crate::models::value::ConfigMap;
use serde::{Deserialize, Serialize};

fn default_metric() -> u32 {
    1
}

/// Router-specific device data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouterData {
    #[serde(default)]
    pub routing_protocols: Vec<RoutingProtocol>,
    #[serde(default)]
    pub static_routes: Vec<StaticRoute>,
}

/// A routing protocol configuration (OSPF, BGP, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingProtocol {
    pub protocol: String,
    #[serde(default)]
    pub process_id: Option<u32>,
    #[serde(default)]
    pub config: ConfigMap,
}

impl RoutingProtocol {
    pub fn new(protocol: impl Into<String>, process_id: Option<u32>) -> Self {
        Self {
            protocol: protocol.into(),
            process_id,
            config: ConfigMap::new(),
        }
    }
}

/// A static route entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    pub destination: String,
    pub next_hop: String,
    #[serde(default = "default_metric")]
    pub metric: u32,
}

impl StaticRoute {
    pub fn new(destination: impl Into<String>, next_hop: impl Into<String>, metric: u32) -> Self {
        Self {
            destination: destination.into(),
            next_hop: next_hop.into(),
            metric,
        }
    }
}
