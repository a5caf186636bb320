// ── API-to-domain conversions ──
//
// Bridges raw `radkit_devices_api` response types into the core model:
// per-source identity mappers for the normalizer and `From` impls for the
// switch-port inventory.

use radkit_devices_api::{CatalystDevice, MerakiDevice, MerakiSwitchPort, MerakiSwitchPorts};

use crate::model::{PortMode, PortRecord, SwitchPorts};

/// Host/name pair extracted from a vendor record, before canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub host: String,
    pub name: String,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Meraki: `lanIp` is the host, `name` the device name.
pub fn meraki_identity(device: &MerakiDevice) -> Option<DeviceIdentity> {
    Some(DeviceIdentity {
        host: non_empty(device.lan_ip.as_deref())?,
        name: non_empty(device.name.as_deref())?,
    })
}

/// Catalyst Center: `managementIpAddress` is the host, `hostname` the name.
pub fn catalyst_identity(device: &CatalystDevice) -> Option<DeviceIdentity> {
    Some(DeviceIdentity {
        host: non_empty(device.management_ip_address.as_deref())?,
        name: non_empty(device.hostname.as_deref())?,
    })
}

/// Catalyst 9000 family filter for Meraki-managed devices.
pub fn is_catalyst_9000(device: &MerakiDevice) -> bool {
    device.model.starts_with("C9")
}

impl From<MerakiSwitchPort> for PortRecord {
    fn from(port: MerakiSwitchPort) -> Self {
        Self {
            port_id: port.port_id,
            name: port.name,
            enabled: port.enabled,
            mode: port.port_type.map(PortMode::from),
            allowed_vlans: port.allowed_vlans,
            vlan: port.vlan,
            voice_vlan: port.voice_vlan,
            extra: port.extra,
        }
    }
}

impl From<MerakiSwitchPorts> for SwitchPorts {
    fn from(switch: MerakiSwitchPorts) -> Self {
        Self {
            name: switch.name,
            serial: switch.serial,
            model: switch.model,
            network: switch.network.map(|n| n.id),
            ports: switch.ports.into_iter().map(PortRecord::from).collect(),
        }
    }
}
