use crate::error::Result;
use crate::models::{Device, DeviceExtension};
use chrono::Utc;
use std::fs;
use std::path::Path;

/// Builds the per-device XML configuration document.
///
/// Optional fields are omitted entirely when absent or empty rather than
/// emitted as empty elements, and blocks for empty collections are dropped.
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, device: &Device) -> Result<String> {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<device-configuration hostname=\"{}\" generated=\"{}\">\n",
            escape_attr(&device.hostname),
            Utc::now().to_rfc3339(),
        ));

        self.write_device_info(&mut out, device);
        self.write_interfaces(&mut out, device);
        self.write_configuration(&mut out, device);
        self.write_extension(&mut out, device);

        out.push_str("</device-configuration>\n");
        Ok(out)
    }

    pub fn export_to_file(&self, device: &Device, path: &Path) -> Result<()> {
        let document = self.export(device)?;
        fs::write(path, document)?;
        Ok(())
    }

    fn write_device_info(&self, out: &mut String, device: &Device) {
        out.push_str("  <device-info>\n");
        out.push_str(&element(4, "hostname", &device.hostname));
        out.push_str(&element(4, "ip-address", &device.ip_address));
        out.push_str(&element(4, "device-type", device.device_type.as_str()));
        out.push_str(&element(4, "vendor", &device.vendor));
        out.push_str(&element(4, "model", &device.model));
        out.push_str("  </device-info>\n");
    }

    fn write_interfaces(&self, out: &mut String, device: &Device) {
        if device.interfaces.is_empty() {
            return;
        }

        out.push_str("  <interfaces>\n");
        for interface in &device.interfaces {
            out.push_str(&format!(
                "    <interface name=\"{}\">\n",
                escape_attr(&interface.name)
            ));
            if !interface.description.is_empty() {
                out.push_str(&element(6, "description", &interface.description));
            }
            if !interface.ip_address.is_empty() {
                out.push_str(&element(6, "ip-address", &interface.ip_address));
            }
            if let Some(vlan) = interface.vlan {
                out.push_str(&element(6, "vlan", &vlan.to_string()));
            }
            out.push_str(&element(6, "enabled", &interface.enabled.to_string()));
            out.push_str("    </interface>\n");
        }
        out.push_str("  </interfaces>\n");
    }

    fn write_configuration(&self, out: &mut String, device: &Device) {
        if device.configuration.is_empty() {
            return;
        }

        out.push_str("  <configuration>\n");
        for (key, value) in &device.configuration {
            out.push_str(&format!(
                "    <parameter name=\"{}\">{}</parameter>\n",
                escape_attr(key),
                escape_text(&value.to_string()),
            ));
        }
        out.push_str("  </configuration>\n");
    }

    fn write_extension(&self, out: &mut String, device: &Device) {
        match &device.extension {
            DeviceExtension::Generic => {}
            DeviceExtension::Router(data) => {
                if data.routing_protocols.is_empty() {
                    return;
                }
                out.push_str("  <routing>\n");
                for protocol in &data.routing_protocols {
                    match protocol.process_id {
                        Some(process_id) => out.push_str(&format!(
                            "    <protocol name=\"{}\" process-id=\"{process_id}\"/>\n",
                            escape_attr(&protocol.protocol)
                        )),
                        None => out.push_str(&format!(
                            "    <protocol name=\"{}\"/>\n",
                            escape_attr(&protocol.protocol)
                        )),
                    }
                }
                out.push_str("  </routing>\n");
            }
            DeviceExtension::Switch(data) => {
                if data.vlans.is_empty() {
                    return;
                }
                out.push_str("  <vlans>\n");
                for vlan in &data.vlans {
                    if vlan.description.is_empty() {
                        out.push_str(&format!(
                            "    <vlan id=\"{}\" name=\"{}\"/>\n",
                            vlan.id,
                            escape_attr(&vlan.name)
                        ));
                    } else {
                        out.push_str(&format!(
                            "    <vlan id=\"{}\" name=\"{}\">{}</vlan>\n",
                            vlan.id,
                            escape_attr(&vlan.name),
                            escape_text(&vlan.description)
                        ));
                    }
                }
                out.push_str("  </vlans>\n");
            }
        }
    }
}

impl Default for XmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn element(indent: usize, name: &str, text: &str) -> String {
    format!(
        "{:indent$}<{name}>{}</{name}>\n",
        "",
        escape_text(text),
        indent = indent,
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfigMap;

    #[test]
    fn test_device_info_block() {
        let device = Device::router("core-router-01", "10.0.0.1")
            .with_vendor("Cisco")
            .with_model("ISR 4331");

        let document = XmlExporter::new().export(&device).unwrap();
        assert!(document.contains("<device-configuration hostname=\"core-router-01\""));
        assert!(document.contains("<hostname>core-router-01</hostname>"));
        assert!(document.contains("<device-type>Router</device-type>"));
        assert!(document.contains("<model>ISR 4331</model>"));
    }

    #[test]
    fn test_empty_blocks_are_omitted() {
        let device = Device::generic("bare", "192.0.2.1");
        let document = XmlExporter::new().export(&device).unwrap();

        assert!(!document.contains("<interfaces>"));
        assert!(!document.contains("<configuration>"));
        assert!(!document.contains("<routing>"));
        assert!(!document.contains("<vlans>"));
    }

    #[test]
    fn test_absent_interface_fields_are_omitted() {
        let mut device = Device::generic("d1", "192.0.2.1");
        device.add_interface("Gi0/0", "", None, "");
        device.add_interface("Gi0/1", "uplink", Some(10), "10.0.0.1");

        let document = XmlExporter::new().export(&device).unwrap();
        let first = document.find("<interface name=\"Gi0/0\">").unwrap();
        let second = document.find("<interface name=\"Gi0/1\">").unwrap();
        let first_block = &document[first..second];

        assert!(!first_block.contains("<description>"));
        assert!(!first_block.contains("<ip-address>"));
        assert!(!first_block.contains("<vlan>"));
        assert!(first_block.contains("<enabled>false</enabled>"));

        assert!(document.contains("<description>uplink</description>"));
        assert!(document.contains("<vlan>10</vlan>"));
    }

    #[test]
    fn test_router_block() {
        let mut router = Device::router("r1", "10.0.0.1");
        router.add_routing_protocol("OSPF", Some(1), ConfigMap::new());
        router.add_routing_protocol("BGP", None, ConfigMap::new());

        let document = XmlExporter::new().export(&router).unwrap();
        assert!(document.contains("<protocol name=\"OSPF\" process-id=\"1\"/>"));
        assert!(document.contains("<protocol name=\"BGP\"/>"));
    }

    #[test]
    fn test_switch_block() {
        let mut switch = Device::switch("s1", "10.0.0.2");
        switch.add_vlan(10, "Data", "User data network");
        switch.add_vlan(99, "Management", "");

        let document = XmlExporter::new().export(&switch).unwrap();
        assert!(document.contains("<vlan id=\"10\" name=\"Data\">User data network</vlan>"));
        assert!(document.contains("<vlan id=\"99\" name=\"Management\"/>"));
    }

    #[test]
    fn test_escaping() {
        let mut device = Device::generic("d<1>", "192.0.2.1");
        device.set_configuration("banner", "unauthorized access & <prosecution>");

        let document = XmlExporter::new().export(&device).unwrap();
        assert!(document.contains("hostname=\"d&lt;1&gt;\""));
        assert!(document
            .contains("<parameter name=\"banner\">unauthorized access &amp; &lt;prosecution&gt;</parameter>"));
    }
}
