// ── Inventory fetchers ──
//
// Thin wrappers that pull a source's inventory through the API clients
// and hand it to the normalizer or the port deriver in core types.

use tracing::info;

use radkit_devices_api::{CatalystClient, CatalystDevice, MerakiClient, MerakiDevice};

use crate::error::CoreError;
use crate::model::SwitchPorts;

/// Catalyst Center software type the tool imports.
pub const CATALYST_SOFTWARE_TYPE: &str = "IOS-XE";

/// Devices of one Meraki network.
pub async fn meraki_devices(
    client: &MerakiClient,
    network_id: &str,
) -> Result<Vec<MerakiDevice>, CoreError> {
    let devices = client.list_network_devices(network_id).await?;
    info!(network_id, count = devices.len(), "fetched Meraki devices");
    Ok(devices)
}

/// Switch-port inventory of one Meraki network.
pub async fn meraki_switch_ports(
    client: &MerakiClient,
    organization_id: &str,
    network_id: &str,
) -> Result<Vec<SwitchPorts>, CoreError> {
    let switches = client
        .list_switch_ports_by_switch(organization_id, network_id)
        .await?;
    info!(network_id, count = switches.len(), "fetched Meraki switch ports");
    Ok(switches.into_iter().map(SwitchPorts::from).collect())
}

/// IOS-XE devices known to Catalyst Center. The client must be logged in.
pub async fn catalyst_devices(client: &CatalystClient) -> Result<Vec<CatalystDevice>, CoreError> {
    let devices = client.list_devices(CATALYST_SOFTWARE_TYPE).await?;
    info!(count = devices.len(), "fetched Catalyst Center devices");
    Ok(devices)
}
