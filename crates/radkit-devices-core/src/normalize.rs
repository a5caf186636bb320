// ── Inventory normalizer ──
//
// Raw vendor inventory → RADkit device-import records. Pure: no I/O, input
// order preserved, no dedup or sorting.

use tracing::{info, warn};

use radkit_devices_api::{CatalystDevice, MerakiDevice};

use crate::convert::{self, DeviceIdentity};
use crate::model::{
    CanonicalDeviceRecord, Credentials, DeviceName, DeviceType, EnabledValue, Provenance,
    TerminalConfig,
};

/// Filter, map and canonicalize a batch of vendor records.
///
/// Records rejected by `filter` are dropped silently; records `mapper`
/// cannot identify (missing host or name) are dropped with a warning.
/// Every emitted record gets its own `TerminalConfig` built from the
/// shared `credentials`.
pub fn normalize<T, F, M>(
    raw: &[T],
    filter: F,
    mapper: M,
    provenance: Provenance,
    credentials: &Credentials,
) -> Vec<CanonicalDeviceRecord>
where
    F: Fn(&T) -> bool,
    M: Fn(&T) -> Option<DeviceIdentity>,
{
    let records: Vec<_> = raw
        .iter()
        .enumerate()
        .filter(|(_, item)| filter(item))
        .filter_map(|(index, item)| {
            let Some(identity) = mapper(item) else {
                warn!(index, %provenance, "skipping device without host or name");
                return None;
            };
            let name = DeviceName::canonicalize(&identity.name);
            if name.is_empty() {
                warn!(index, %provenance, "skipping device with empty name");
                return None;
            }
            Some(CanonicalDeviceRecord {
                device_type: DeviceType::IosXe,
                enabled: EnabledValue::Bool(true),
                host: identity.host,
                name,
                description: Some(provenance.as_str().to_owned()),
                terminal: TerminalConfig::ssh(credentials),
            })
        })
        .collect();

    info!(
        %provenance,
        input = raw.len(),
        output = records.len(),
        "normalized device inventory"
    );
    records
}

/// Meraki devices: keep the Catalyst 9000 family only.
pub fn normalize_meraki(
    devices: &[MerakiDevice],
    credentials: &Credentials,
) -> Vec<CanonicalDeviceRecord> {
    normalize(
        devices,
        convert::is_catalyst_9000,
        convert::meraki_identity,
        Provenance::Meraki,
        credentials,
    )
}

/// Catalyst Center devices: already filtered server-side by software type.
pub fn normalize_catalyst(
    devices: &[CatalystDevice],
    credentials: &Credentials,
) -> Vec<CanonicalDeviceRecord> {
    normalize(
        devices,
        |_| true,
        convert::catalyst_identity,
        Provenance::Catalyst,
        credentials,
    )
}
