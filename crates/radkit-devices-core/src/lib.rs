//! Device-record pipelines between vendor inventory and RADkit.
//!
//! - **Normalizer** ([`mod@normalize`]): Meraki / Catalyst Center inventory →
//!   [`CanonicalDeviceRecord`]s with the operator's credentials attached.
//! - **Port deriver** ([`ports`]): Meraki switch-port inventory → one
//!   host-vars YAML [`DeviceConfigDocument`] per switch.
//! - **Import reader** ([`import`]): JSON / CSV device-import files →
//!   canonical records, and [`upload`] to push them to a RADkit Service.
//!
//! The HTTP clients live in `radkit-devices-api`, re-exported as [`api`].

pub mod canonical;
pub mod convert;
pub mod error;
pub mod export;
pub mod import;
pub mod inventory;
pub mod model;
pub mod normalize;
pub mod ports;
pub mod upload;

pub use radkit_devices_api as api;

// ── Primary re-exports ──────────────────────────────────────────────
pub use canonical::{canonical_device_name, canonical_interface_name};
pub use convert::{DeviceIdentity, catalyst_identity, meraki_identity};
pub use error::CoreError;
pub use export::{devices_to_json, write_devices_json};
pub use import::{ImportFormat, read_devices_csv, read_devices_file, read_devices_json};
pub use model::{
    CanonicalDeviceRecord, ConnectionMethod, Credentials, DeviceConfigDocument, DeviceName,
    DeviceType, EnabledValue, InterfaceConfig, PortMode, PortRecord, Provenance, SwitchPorts,
    TerminalConfig,
};
pub use normalize::{normalize, normalize_catalyst, normalize_meraki};
pub use ports::{build_device_document, derive_port_config, write_device_document};
pub use upload::{UploadOutcome, upload_devices};
