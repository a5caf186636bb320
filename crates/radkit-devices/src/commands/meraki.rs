//! Meraki Dashboard actions: device JSON and per-switch YAML.

use radkit_devices_core::api::MerakiClient;
use radkit_devices_core::{build_device_document, inventory, normalize_meraki, write_device_document};

use super::{Context, util};
use crate::error::CliError;

/// Dashboard session scoped to the organization/network the operator
/// picked.
struct NetworkSelection {
    client: MerakiClient,
    organization_id: String,
    network_id: String,
}

async fn select_network(ctx: &mut Context<'_>) -> Result<NetworkSelection, CliError> {
    ctx.step("Step 1 - Initialize Meraki Dashboard")?;
    let key = match (ctx.meraki_key)() {
        Some(key) => key,
        None => ctx.secret(" Enter Meraki API key")?,
    };
    let client = MerakiClient::from_api_key(
        &ctx.config.meraki_url,
        &key,
        &ctx.config.meraki_transport(),
    )?;

    let organizations = client.list_organizations().await?;
    ctx.step("Step 2 - Select Organization:")?;
    let organization_id = util::select(ctx, "Organization", &organizations, |o| {
        (o.name.clone(), o.id.clone())
    })?
    .id
    .clone();

    let networks = client.list_organization_networks(&organization_id).await?;
    ctx.step("Step 3 - Select Network:")?;
    let network_id = util::select(ctx, "Network", &networks, |n| {
        (n.name.clone(), n.id.clone())
    })?
    .id
    .clone();

    Ok(NetworkSelection {
        client,
        organization_id,
        network_id,
    })
}

/// a) Meraki devices → device-import JSON (Catalyst 9000 family only).
pub async fn devices_to_json(ctx: &mut Context<'_>) -> Result<(), CliError> {
    let selection = select_network(ctx).await?;

    ctx.step("Step 4 - Getting Devices...")?;
    let devices = inventory::meraki_devices(&selection.client, &selection.network_id).await?;

    util::write_records(ctx, |credentials| normalize_meraki(&devices, credentials))
}

/// e) Meraki switch ports → one YAML host-vars file per switch.
pub async fn ports_to_yaml(ctx: &mut Context<'_>) -> Result<(), CliError> {
    let selection = select_network(ctx).await?;

    ctx.step("Step 4 - Getting Switch Ports...")?;
    let switches = inventory::meraki_switch_ports(
        &selection.client,
        &selection.organization_id,
        &selection.network_id,
    )
    .await?;

    if switches.is_empty() {
        return ctx.say("No switches found in this network.");
    }

    for switch in &switches {
        let doc = build_device_document(switch);
        let path = write_device_document(ctx.output_dir, &doc)?;
        ctx.say(&format!(
            "Device configuration written to {}",
            path.display()
        ))?;
    }
    Ok(())
}
