// Catalyst Center response types

use serde::{Deserialize, Serialize};

/// Intent API envelope: `{ "response": ..., "version": "..." }`.
#[derive(Debug, Deserialize)]
pub struct CatalystResponse<T> {
    pub response: T,
    #[serde(default)]
    pub version: Option<String>,
}

/// Token endpoint body: `{ "Token": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(rename = "Token")]
    pub token: String,
}

/// Network device from `GET /dna/intent/api/v1/network-device`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalystDevice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub management_ip_address: Option<String>,
    #[serde(default)]
    pub software_type: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
