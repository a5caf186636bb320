//! Configuration for the RADkit devices tool.
//!
//! Endpoints, TLS and timeout settings layered from built-in defaults, an
//! optional `config.toml`, and `RADKIT_DEVICES_*` environment variables,
//! plus Meraki API key resolution (env var, then system keyring).

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use radkit_devices_api::catalyst::DEFAULT_CATALYST_URL;
use radkit_devices_api::control::DEFAULT_CONTROL_API_URL;
use radkit_devices_api::meraki::DEFAULT_MERAKI_URL;
use radkit_devices_api::{TlsMode, TransportConfig};

/// Environment variable holding the Meraki Dashboard API key.
pub const MERAKI_API_KEY_ENV: &str = "MERAKI_DASHBOARD_API_KEY";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "RADKIT_DEVICES_";

const KEYRING_SERVICE: &str = "radkit-devices";
const KEYRING_MERAKI_USER: &str = "meraki-api-key";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config ──────────────────────────────────────────────────────────

/// Effective tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Meraki Dashboard API base URL.
    pub meraki_url: String,

    /// Catalyst Center base URL.
    pub catalyst_url: String,

    /// RADkit Service control API base URL.
    pub control_api_url: String,

    /// RADkit Service admin account used for uploads.
    pub admin_name: String,

    /// Directory the per-switch YAML files are written to.
    pub output_dir: PathBuf,

    /// Skip certificate verification for Catalyst Center and the RADkit
    /// Service (both usually run with self-signed certificates).
    pub insecure: bool,

    /// Custom CA certificate for Catalyst Center and the RADkit Service,
    /// used when `insecure` is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// HTTP timeout in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meraki_url: DEFAULT_MERAKI_URL.into(),
            catalyst_url: DEFAULT_CATALYST_URL.into(),
            control_api_url: DEFAULT_CONTROL_API_URL.into(),
            admin_name: "superadmin".into(),
            output_dir: PathBuf::from("../ansible/device_vars"),
            insecure: true,
            ca_cert: None,
            timeout: 30,
        }
    }
}

impl Config {
    /// Check URLs and numeric bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("meraki_url", &self.meraki_url),
            ("catalyst_url", &self.catalyst_url),
            ("control_api_url", &self.control_api_url),
        ] {
            value
                .parse::<url::Url>()
                .map_err(|e| ConfigError::Validation {
                    field: field.into(),
                    reason: format!("{value}: {e}"),
                })?;
        }

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        if self.admin_name.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "admin_name".into(),
                reason: "must not be empty".into(),
            });
        }

        Ok(())
    }

    /// Transport for the Meraki cloud, always verified against the system
    /// store.
    pub fn meraki_transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::System,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// Transport for the on-prem services (Catalyst Center, RADkit).
    pub fn service_transport(&self) -> TransportConfig {
        let tls = if self.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca) = self.ca_cert {
            TlsMode::CustomCa(ca.clone())
        } else {
            TlsMode::System
        };
        TransportConfig {
            tls,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "radkit-devices", "radkit-devices").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("radkit-devices");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
}

/// Load and validate the config from the platform config file + env.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load and validate the config from `path` + env. A missing file is not
/// an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = figment(path).extract()?;
    config.validate()?;
    Ok(config)
}

// ── Credential resolution ───────────────────────────────────────────

/// Meraki API key from the environment or the system keyring, `None` when
/// neither has one (the caller then prompts).
pub fn resolve_meraki_api_key() -> Option<SecretString> {
    // 1. Env var
    if let Ok(key) = std::env::var(MERAKI_API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Some(SecretString::from(key));
        }
    }

    // 2. System keyring
    keyring::Entry::new(KEYRING_SERVICE, KEYRING_MERAKI_USER)
        .and_then(|entry| entry.get_password())
        .ok()
        .map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.admin_name, "superadmin");
        assert_eq!(config.output_dir, PathBuf::from("../ansible/device_vars"));
        assert!(config.insecure);
    }

    #[test]
    fn bad_url_fails_validation() {
        let config = Config {
            control_api_url: "not a url".into(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation { ref field, .. } if field == "control_api_url")
        );
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn service_transport_follows_insecure_flag() {
        let insecure = Config::default().service_transport();
        assert!(matches!(insecure.tls, TlsMode::DangerAcceptInvalid));

        let pinned = Config {
            insecure: false,
            ca_cert: Some(PathBuf::from("/etc/radkit/ca.pem")),
            ..Config::default()
        }
        .service_transport();
        assert!(matches!(pinned.tls, TlsMode::CustomCa(_)));

        assert!(matches!(Config::default().meraki_transport().tls, TlsMode::System));
    }
}
