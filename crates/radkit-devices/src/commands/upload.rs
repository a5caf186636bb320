//! Upload actions: device-import file → RADkit Service.

use radkit_devices_core::api::ControlApiClient;
use radkit_devices_core::{
    CoreError, ImportFormat, UploadOutcome, read_devices_file, upload_devices,
};

use super::{Context, util};
use crate::error::CliError;

/// c) / d) Read an import file and create its devices on the RADkit
/// Service. Connection and creation failures are reported, not returned.
pub async fn from_file(ctx: &mut Context<'_>, format: ImportFormat) -> Result<(), CliError> {
    let label = format.label();
    let path = util::prompt_path(ctx, &format!("  Enter Input {label} file"))?;

    let devices = read_devices_file(&path, format)?;

    ctx.say(&format!(
        "Imported {} devices from {label} file.",
        devices.len()
    ))?;
    if devices.is_empty() {
        return ctx.say(&format!("No devices imported from {label}."));
    }

    let admin_name = ctx.config.admin_name.clone();
    let password = ctx.secret(&format!("  Enter RADkit {admin_name} password"))?;

    ctx.say("Creating devices...")?;
    let outcome = match ControlApiClient::new(
        &ctx.config.control_api_url,
        &ctx.config.service_transport(),
    ) {
        Ok(mut client) => upload_devices(&mut client, &admin_name, &password, &devices).await,
        Err(e) => Err(CoreError::Upload(e)),
    };

    match outcome {
        Ok(UploadOutcome::Created(_)) => ctx.say("Successfully created devices."),
        Ok(UploadOutcome::NothingCreated) => ctx.say("No devices created."),
        Ok(UploadOutcome::NoDevices) => ctx.say(&format!("No devices imported from {label}.")),
        Err(e) => {
            tracing::debug!(error = ?e, "upload failed");
            ctx.say(&e.to_string())
        }
    }
}
