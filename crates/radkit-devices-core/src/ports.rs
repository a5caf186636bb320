// ── Port-configuration deriver ──
//
// Switch inventory → per-device host-vars documents. The dashboard port
// name carries both the interface and its description, separated by the
// first `-` ("Gi1/0/1 - uplink to core").

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::canonical::canonical_interface_name;
use crate::error::CoreError;
use crate::model::{
    AccessConfig, DeviceConfigDocument, DeviceName, InterfaceConfig, InterfaceEntry, PortMode,
    PortRecord, SwitchPorts, SystemEntry, TrunkConfig, VoiceConfig,
};

/// Split a dashboard port name into interface and description.
///
/// Both halves are trimmed; without a separator the description is `None`.
pub fn split_port_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once('-') {
        Some((interface, description)) => (interface.trim(), Some(description.trim())),
        None => (name.trim(), None),
    }
}

/// Derive the interface configuration of one port, or `None` when the
/// port has no usable name.
pub fn derive_port_config(port: &PortRecord) -> Option<InterfaceConfig> {
    let raw = port.name.as_deref().filter(|n| !n.is_empty())?;
    let (interface, description) = split_port_name(raw);

    let name = canonical_interface_name(interface);
    if name.is_empty() {
        return None;
    }

    let mut config = InterfaceConfig {
        name,
        description: description.map(str::to_owned),
        enabled: port.enabled,
        mode: port.mode.clone(),
        trunk: None,
        access: None,
        voice: None,
    };

    match port.mode {
        Some(PortMode::Trunk) => {
            config.trunk = Some(TrunkConfig {
                allowed_vlans: port.allowed_vlans.clone(),
                native_vlan: port.vlan,
            });
        }
        Some(PortMode::Access) => {
            config.access = Some(AccessConfig { vlan: port.vlan });
            config.voice = port.voice_vlan.map(|vlan| VoiceConfig { vlan });
        }
        Some(PortMode::Other(_)) | None => {}
    }

    Some(config)
}

/// Device name of a switch as the dashboard shows it, or the serial when
/// the switch is unnamed.
pub fn switch_device_name(switch: &SwitchPorts) -> &str {
    switch
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&switch.serial)
}

/// Build the host-vars document of one switch, ports in inventory order.
pub fn build_device_document(switch: &SwitchPorts) -> DeviceConfigDocument {
    let interfaces: Vec<_> = switch
        .ports
        .iter()
        .filter_map(derive_port_config)
        .map(|interface| InterfaceEntry { interface })
        .collect();

    let device_name = switch_device_name(switch);
    debug!(
        device = %device_name,
        ports = switch.ports.len(),
        interfaces = interfaces.len(),
        "derived port configuration"
    );

    DeviceConfigDocument {
        system: vec![SystemEntry {
            device_name: device_name.to_owned(),
        }],
        interfaces,
    }
}

/// Render a document as block-style YAML.
pub fn render_device_document(doc: &DeviceConfigDocument) -> Result<String, CoreError> {
    Ok(serde_yaml::to_string(doc)?)
}

/// File name of a document: `<canonical device name>.yaml`. The header
/// keeps the name as written.
pub fn device_file_name(doc: &DeviceConfigDocument) -> String {
    let name = DeviceName::canonicalize(doc.device_name().unwrap_or_default());
    let stem = if name.is_empty() { "unnamed" } else { name.as_str() };
    format!("{stem}.yaml")
}

/// Write a document into `dir`, creating the directory if needed.
/// Returns the path written.
pub fn write_device_document(dir: &Path, doc: &DeviceConfigDocument) -> Result<PathBuf, CoreError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(device_file_name(doc));
    fs::write(&path, render_device_document(doc)?)?;
    info!(path = %path.display(), "wrote device configuration");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(name: Option<&str>, mode: &str) -> PortRecord {
        PortRecord {
            name: name.map(str::to_owned),
            enabled: true,
            mode: Some(PortMode::from(mode.to_string())),
            vlan: Some(10),
            ..PortRecord::default()
        }
    }

    #[test]
    fn split_on_first_dash() {
        assert_eq!(
            split_port_name("Gi1/0/1 - uplink to core"),
            ("Gi1/0/1", Some("uplink to core"))
        );
        assert_eq!(split_port_name("Gi1/0/2"), ("Gi1/0/2", None));
        assert_eq!(
            split_port_name("Gi1/0/3 - AP - lobby"),
            ("Gi1/0/3", Some("AP - lobby"))
        );
        assert_eq!(split_port_name("Gi1/0/4 -"), ("Gi1/0/4", Some("")));
        // Hyphenated long forms split too; Dashboard names use abbreviations.
        assert_eq!(
            split_port_name("Port-channel1 - lag"),
            ("Port", Some("channel1 - lag"))
        );
    }

    #[test]
    fn nameless_ports_are_dropped() {
        assert_eq!(derive_port_config(&port(None, "access")), None);
        assert_eq!(derive_port_config(&port(Some(""), "access")), None);
        assert_eq!(derive_port_config(&port(Some(" - spare"), "access")), None);
    }

    #[test]
    fn trunk_port_gets_trunk_block_only() {
        let mut trunk = port(Some("Gi1/0/1 - uplink"), "trunk");
        trunk.allowed_vlans = Some("1,10,20-30".into());
        trunk.voice_vlan = Some(45);

        let config = derive_port_config(&trunk).unwrap();

        assert_eq!(config.name, "GigabitEthernet1/0/1");
        assert_eq!(config.description.as_deref(), Some("uplink"));
        assert_eq!(
            config.trunk,
            Some(TrunkConfig {
                allowed_vlans: Some("1,10,20-30".into()),
                native_vlan: Some(10),
            })
        );
        assert!(config.access.is_none());
        assert!(config.voice.is_none());
    }

    #[test]
    fn access_port_gets_voice_only_when_set() {
        let mut phone = port(Some("Gi1/0/2"), "access");
        phone.voice_vlan = Some(45);
        let data = port(Some("Gi1/0/3"), "access");

        let phone = derive_port_config(&phone).unwrap();
        let data = derive_port_config(&data).unwrap();

        assert_eq!(phone.access, Some(AccessConfig { vlan: Some(10) }));
        assert_eq!(phone.voice, Some(VoiceConfig { vlan: 45 }));
        assert!(phone.trunk.is_none());
        assert!(data.voice.is_none());
    }

    #[test]
    fn other_modes_get_base_block_only() {
        let config = derive_port_config(&port(Some("Gi1/1/1"), "stack")).unwrap();
        assert!(config.trunk.is_none());
        assert!(config.access.is_none());
        assert!(config.voice.is_none());
    }

    #[test]
    fn document_drops_nameless_ports_and_keeps_order() {
        let switch = SwitchPorts {
            name: Some("SW1".into()),
            serial: "Q2XX-AAAA".into(),
            ports: vec![
                port(Some("Gi1/0/2"), "access"),
                port(None, "access"),
                port(Some("Gi1/0/1"), "trunk"),
            ],
            ..SwitchPorts::default()
        };

        let doc = build_device_document(&switch);

        assert_eq!(doc.device_name(), Some("SW1"));
        let names: Vec<_> = doc.interfaces.iter().map(|e| e.interface.name.as_str()).collect();
        assert_eq!(names, ["GigabitEthernet1/0/2", "GigabitEthernet1/0/1"]);
    }

    #[test]
    fn unnamed_switch_falls_back_to_serial() {
        let switch = SwitchPorts {
            serial: "Q2XX-AAAA".into(),
            ..SwitchPorts::default()
        };
        assert_eq!(switch_device_name(&switch), "Q2XX-AAAA");
        assert_eq!(
            device_file_name(&build_device_document(&switch)),
            "q2xx-aaaa.yaml"
        );
    }

    #[test]
    fn header_keeps_dashboard_name_and_file_is_canonical() {
        let switch = SwitchPorts {
            name: Some("HQ-Access SW1".into()),
            serial: "Q2XX-CCCC".into(),
            ..SwitchPorts::default()
        };

        let doc = build_device_document(&switch);

        assert_eq!(doc.device_name(), Some("HQ-Access SW1"));
        assert_eq!(device_file_name(&doc), "hq-access_sw1.yaml");
    }
}
