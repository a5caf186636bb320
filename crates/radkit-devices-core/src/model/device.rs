// ── Device-import record types ──

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::canonical::canonical_device_name;

/// RADkit device type. Both inventory pipelines produce `IOS_XE`; the
/// import reader accepts any member by its wire name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    AireOs,
    Apic,
    Asa,
    Broadworks,
    CatalystCenter,
    Cedge,
    Cimc,
    CiscoApOs,
    Cml,
    Crosswork,
    Cspc,
    Cucm,
    Cvos,
    Cvp,
    Esa,
    Expressway,
    Fdm,
    Fmc,
    Ftd,
    Generic,
    Hyperflex,
    Intersight,
    IosXe,
    IosXr,
    Ise,
    Linux,
    NexusDashboard,
    Nfvis,
    Nso,
    NxOs,
    RadkitService,
    Splunk,
    StarOs,
    Ucce,
    UcsManager,
    Vmanage,
    Wlc,
}

/// The `enabled` column as it arrives: derived records carry a real
/// boolean, CSV imports carry the cell text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnabledValue {
    Bool(bool),
    Text(String),
}

impl EnabledValue {
    /// Best-effort boolean reading of the value, `None` when the text is
    /// not a recognizable boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(text) => parse_bool(text),
        }
    }
}

impl Default for EnabledValue {
    fn default() -> Self {
        Self::Bool(true)
    }
}

impl From<bool> for EnabledValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Canonical RADkit device name.
///
/// The only constructors canonicalize, so a record can never hold a raw
/// vendor name. Deserialization canonicalizes too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DeviceName(String);

impl DeviceName {
    pub fn canonicalize(raw: &str) -> Self {
        Self(canonical_device_name(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for DeviceName {
    fn from(raw: String) -> Self {
        Self::canonicalize(&raw)
    }
}

impl From<DeviceName> for String {
    fn from(name: DeviceName) -> Self {
        name.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a derived record came from; serialized into `description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Meraki,
    Catalyst,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meraki => "meraki",
            Self::Catalyst => "dnac",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal access method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionMethod {
    #[serde(rename = "SSH")]
    Ssh,
    #[serde(rename = "TELNET")]
    Telnet,
    #[serde(rename = "SSHPUBKEY")]
    SshPubkey,
    #[serde(rename = "TELNET_NO_AUTH")]
    TelnetNoAuth,
}

/// Operator-entered credential triple shared by every record of a batch.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    pub enable_secret: SecretString,
}

/// Terminal (SSH/Telnet) settings of an import record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_method: Option<ConnectionMethod>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub enable_set: bool,
    #[serde(default)]
    pub use_insecure_algorithms: bool,
    #[serde(default = "default_true")]
    pub use_tunneling_if_jumphost: bool,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub enable: String,
}

fn default_true() -> bool {
    true
}

impl TerminalConfig {
    /// Default SSH settings for a derived record, filled from the batch
    /// credentials.
    pub fn ssh(credentials: &Credentials) -> Self {
        Self {
            port: Some(22),
            connection_method: Some(ConnectionMethod::Ssh),
            username: credentials.username.clone(),
            enable_set: true,
            use_insecure_algorithms: false,
            use_tunneling_if_jumphost: true,
            password: credentials.password.expose_secret().to_owned(),
            enable: credentials.enable_secret.expose_secret().to_owned(),
        }
    }
}

impl fmt::Debug for TerminalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConfig")
            .field("port", &self.port)
            .field("connection_method", &self.connection_method)
            .field("username", &self.username)
            .field("enable_set", &self.enable_set)
            .field("use_insecure_algorithms", &self.use_insecure_algorithms)
            .field("use_tunneling_if_jumphost", &self.use_tunneling_if_jumphost)
            .field("password", &"[REDACTED]")
            .field("enable", &"[REDACTED]")
            .finish()
    }
}

/// One entry of a RADkit device-import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalDeviceRecord {
    pub device_type: DeviceType,
    pub enabled: EnabledValue,
    pub host: String,
    pub name: DeviceName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub terminal: TerminalConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".into(),
            password: SecretString::from("x".to_string()),
            enable_secret: SecretString::from("y".to_string()),
        }
    }

    #[test]
    fn device_type_wire_names() {
        assert_eq!(DeviceType::IosXe.to_string(), "IOS_XE");
        assert_eq!(DeviceType::NxOs.to_string(), "NX_OS");
        assert_eq!("IOS_XR".parse::<DeviceType>().ok(), Some(DeviceType::IosXr));
        assert!("IOS-XE".parse::<DeviceType>().is_err());
        assert_eq!(json!(DeviceType::CiscoApOs), json!("CISCO_AP_OS"));
    }

    #[test]
    fn serde_and_strum_agree_on_every_variant() {
        use strum::IntoEnumIterator;
        for ty in DeviceType::iter() {
            assert_eq!(json!(ty), json!(ty.to_string()));
        }
    }

    #[test]
    fn enabled_value_is_untagged() {
        assert_eq!(json!(EnabledValue::Bool(true)), json!(true));
        assert_eq!(json!(EnabledValue::Text("True".into())), json!("True"));
        let text: EnabledValue = serde_json::from_value(json!("no")).unwrap();
        assert_eq!(text, EnabledValue::Text("no".into()));
        assert_eq!(text.as_bool(), Some(false));
        assert_eq!(EnabledValue::Text("maybe".into()).as_bool(), None);
    }

    #[test]
    fn device_name_deserializes_canonical() {
        let name: DeviceName = serde_json::from_value(json!("SW 1")).unwrap();
        assert_eq!(name.as_str(), "sw_1");
    }

    #[test]
    fn ssh_terminal_defaults() {
        let terminal = TerminalConfig::ssh(&credentials());
        assert_eq!(
            serde_json::to_value(&terminal).unwrap(),
            json!({
                "port": 22,
                "connectionMethod": "SSH",
                "username": "admin",
                "enableSet": true,
                "useInsecureAlgorithms": false,
                "useTunnelingIfJumphost": true,
                "password": "x",
                "enable": "y"
            })
        );
    }

    #[test]
    fn terminal_debug_redacts_secrets() {
        let rendered = format!("{:?}", TerminalConfig::ssh(&credentials()));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("\"x\""));
        assert!(!rendered.contains("\"y\""));
    }

    #[test]
    fn terminal_missing_flags_take_defaults() {
        let terminal: TerminalConfig =
            serde_json::from_value(json!({ "username": "u", "password": "p" })).unwrap();
        assert_eq!(terminal.port, None);
        assert!(!terminal.use_insecure_algorithms);
        assert!(terminal.use_tunneling_if_jumphost);
    }
}
