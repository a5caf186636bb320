// ── Canonical domain model ──
//
// Device-import records shared by the normalizer, the import reader and
// the upload session, plus the switch-port types of the port deriver.

pub mod device;
pub mod port;

pub use device::{
    CanonicalDeviceRecord, ConnectionMethod, Credentials, DeviceName, DeviceType, EnabledValue,
    Provenance, TerminalConfig,
};
pub use port::{
    AccessConfig, DeviceConfigDocument, InterfaceConfig, InterfaceEntry, PortMode, PortRecord,
    SwitchPorts, SystemEntry, TrunkConfig, VoiceConfig,
};
