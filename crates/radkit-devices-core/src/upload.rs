// ── RADkit upload session ──
//
// login → create devices → logout. The session is closed whatever the
// create call returned; a failed logout is logged, never surfaced.

use secrecy::SecretString;
use tracing::{info, warn};

use radkit_devices_api::ControlApiClient;

use crate::error::CoreError;
use crate::model::CanonicalDeviceRecord;

/// Result of an upload attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Empty batch; no session was opened.
    NoDevices,
    /// The service created devices and returned this result.
    Created(serde_json::Value),
    /// The service accepted the batch but returned no result.
    NothingCreated,
}

/// Upload a batch of records in one admin session.
pub async fn upload_devices(
    client: &mut ControlApiClient,
    admin_name: &str,
    password: &SecretString,
    devices: &[CanonicalDeviceRecord],
) -> Result<UploadOutcome, CoreError> {
    if devices.is_empty() {
        return Ok(UploadOutcome::NoDevices);
    }

    client
        .login(admin_name, password)
        .await
        .map_err(CoreError::Upload)?;
    info!(count = devices.len(), "uploading devices to RADkit service");

    let created = client.create_devices(devices).await;

    if let Err(e) = client.logout().await {
        warn!(error = %e, "RADkit logout failed");
    }

    match created.map_err(CoreError::Upload)? {
        Some(result) => Ok(UploadOutcome::Created(result)),
        None => Ok(UploadOutcome::NothingCreated),
    }
}
