pub mod device;
pub mod interface;
pub mod routing;
pub mod switching;
pub mod value;

pub use device::{Device, DeviceExtension, DeviceType};
pub use interface::{Interface, InterfaceChanges};
pub use routing::{RouterData, RoutingProtocol, StaticRoute};
pub use switching::{SwitchData, Vlan};
pub use value::{ConfigMap, ConfigValue};
