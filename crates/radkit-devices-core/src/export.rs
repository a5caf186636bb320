// ── Device-file writers ──

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::CoreError;
use crate::model::CanonicalDeviceRecord;

/// Serialize records as a JSON array indented with four spaces.
pub fn devices_to_json(records: &[CanonicalDeviceRecord]) -> Result<String, CoreError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write records to `path` as a RADkit device-import JSON file.
pub fn write_devices_json(path: &Path, records: &[CanonicalDeviceRecord]) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(devices_to_json(records)?.as_bytes())?;
    info!(path = %path.display(), count = records.len(), "wrote device import file");
    Ok(())
}
