// ── Switch-port and interface-config types ──

use serde::{Deserialize, Serialize};

/// Switchport mode as reported by the dashboard (`type` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PortMode {
    Trunk,
    Access,
    Other(String),
}

impl From<String> for PortMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "trunk" => Self::Trunk,
            "access" => Self::Access,
            _ => Self::Other(raw),
        }
    }
}

impl From<PortMode> for String {
    fn from(mode: PortMode) -> Self {
        match mode {
            PortMode::Trunk => "trunk".into(),
            PortMode::Access => "access".into(),
            PortMode::Other(raw) => raw,
        }
    }
}

/// One port of a switch inventory record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortRecord {
    pub port_id: Option<String>,
    pub name: Option<String>,
    pub enabled: bool,
    pub mode: Option<PortMode>,
    pub allowed_vlans: Option<String>,
    pub vlan: Option<u32>,
    pub voice_vlan: Option<u32>,
    /// Dashboard fields the deriver ignores.
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One switch with its ports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchPorts {
    pub name: Option<String>,
    pub serial: String,
    pub model: Option<String>,
    pub network: Option<String>,
    pub ports: Vec<PortRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrunkConfig {
    pub allowed_vlans: Option<String>,
    pub native_vlan: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    pub vlan: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    pub vlan: u32,
}

/// Derived configuration of one interface.
///
/// At most one of `trunk` / `access` is set, and `voice` only accompanies
/// `access`. [`derive_port_config`](crate::ports::derive_port_config) is the
/// only producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub mode: Option<PortMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk: Option<TrunkConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntry {
    pub interface: InterfaceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEntry {
    pub device_name: String,
}

/// Host-vars document for one switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfigDocument {
    pub system: Vec<SystemEntry>,
    pub interfaces: Vec<InterfaceEntry>,
}

impl DeviceConfigDocument {
    /// Device name from the `system` header.
    pub fn device_name(&self) -> Option<&str> {
        self.system.first().map(|s| s.device_name.as_str())
    }
}
