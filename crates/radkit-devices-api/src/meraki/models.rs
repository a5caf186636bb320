// Meraki Dashboard response types
//
// Only the fields the tool consumes are modelled explicitly. The Dashboard
// adds fields between API releases, so everything else lands in `extra`.

use serde::{Deserialize, Serialize};

/// Organization from `GET /organizations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Network from `GET /organizations/{organizationId}/networks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub product_types: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Device from `GET /networks/{networkId}/devices`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerakiDevice {
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub lan_ip: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub firmware: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Network reference embedded in the ports-by-switch payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One switch from `GET /organizations/{organizationId}/switch/ports/bySwitch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerakiSwitchPorts {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub network: Option<NetworkRef>,
    #[serde(default)]
    pub ports: Vec<MerakiSwitchPort>,
}

/// Port configuration nested in [`MerakiSwitchPorts`].
///
/// `vlan` / `voiceVlan` are integers or `null`; `allowedVlans` is a
/// free-form range string such as `"all"` or `"1,10,20-30"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerakiSwitchPort {
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, rename = "type")]
    pub port_type: Option<String>,
    #[serde(default)]
    pub vlan: Option<u32>,
    #[serde(default)]
    pub voice_vlan: Option<u32>,
    #[serde(default)]
    pub allowed_vlans: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
