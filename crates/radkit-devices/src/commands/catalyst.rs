//! Catalyst Center action: device JSON.

use radkit_devices_core::api::CatalystClient;
use radkit_devices_core::{inventory, normalize_catalyst};

use super::{Context, util};
use crate::error::CliError;

/// b) Catalyst Center IOS-XE devices → device-import JSON.
pub async fn devices_to_json(ctx: &mut Context<'_>) -> Result<(), CliError> {
    let username = ctx.input("  Enter DNAC username")?;
    let password = ctx.secret("  Enter DNAC password")?;

    let mut client =
        CatalystClient::new(&ctx.config.catalyst_url, &ctx.config.service_transport())?;
    client.login(&username, &password).await?;

    ctx.step("Step 4 - Getting Devices...")?;
    let devices = inventory::catalyst_devices(&client).await?;

    util::write_records(ctx, |credentials| normalize_catalyst(&devices, credentials))
}
