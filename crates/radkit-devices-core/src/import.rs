// ── Import-file reader ──
//
// Device-import files (JSON or CSV) → canonical records ready for upload.
// Only `name`, `host` and `deviceType` are mandatory; hosts and
// credentials are not validated.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::CoreError;
use crate::model::device::parse_bool;
use crate::model::{CanonicalDeviceRecord, DeviceName, DeviceType, EnabledValue, TerminalConfig};

/// Resolve a device-type wire name (`"IOS_XE"`) to [`DeviceType`].
pub fn resolve_device_type(raw: &str) -> Result<DeviceType, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::UnknownDeviceType {
            value: raw.to_owned(),
        })
}

fn required(value: Option<String>, index: usize, field: &'static str) -> Result<String, CoreError> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(CoreError::MalformedRecord { index, field })
}

fn record_name(value: Option<String>, index: usize) -> Result<DeviceName, CoreError> {
    let name = DeviceName::canonicalize(&required(value, index, "name")?);
    if name.is_empty() {
        return Err(CoreError::MalformedRecord {
            index,
            field: "name",
        });
    }
    Ok(name)
}

// ── JSON ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRecord {
    #[serde(default)]
    device_type: Option<String>,
    #[serde(default)]
    enabled: Option<EnabledValue>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    terminal: Option<TerminalConfig>,
}

/// Read a JSON array of device-import records.
pub fn read_devices_json<R: Read>(reader: R) -> Result<Vec<CanonicalDeviceRecord>, CoreError> {
    let raw: Vec<JsonRecord> = serde_json::from_reader(reader)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let device_type = required(record.device_type, index, "deviceType")?;
            Ok(CanonicalDeviceRecord {
                device_type: resolve_device_type(&device_type)?,
                enabled: record.enabled.unwrap_or_default(),
                host: required(record.host, index, "host")?,
                name: record_name(record.name, index)?,
                description: record.description,
                terminal: record.terminal.ok_or(CoreError::MalformedRecord {
                    index,
                    field: "terminal",
                })?,
            })
        })
        .collect()
}

// ── CSV ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CsvRow {
    #[serde(rename = "name(mandatory)", alias = "name", default)]
    name: Option<String>,
    #[serde(rename = "host(mandatory)", alias = "host", default)]
    host: Option<String>,
    #[serde(rename = "deviceType(mandatory)", alias = "deviceType", default)]
    device_type: Option<String>,
    #[serde(default, deserialize_with = "raw_cell")]
    enabled: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "terminal.username", default)]
    username: Option<String>,
    #[serde(rename = "terminal.password", default)]
    password: Option<String>,
    #[serde(rename = "terminal.enable", default)]
    enable: Option<String>,
    #[serde(rename = "terminal.enableSet", default)]
    enable_set: Option<String>,
}

// An empty cell is `Some("")`; only a missing column is `None`.
fn raw_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    String::deserialize(deserializer).map(Some)
}

/// Read a CSV device-import file (header row required).
///
/// `enabled` is kept as the raw cell text, empty included; a file without
/// the column gets `true`. An empty `terminal.enableSet`
/// is true exactly when an enable secret is present.
pub fn read_devices_csv<R: Read>(reader: R) -> Result<Vec<CanonicalDeviceRecord>, CoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = row?;
        let device_type = required(row.device_type, index, "deviceType")?;
        let enable = row.enable.unwrap_or_default();
        let enable_set = match row.enable_set.as_deref() {
            None => !enable.is_empty(),
            Some(raw) => parse_bool(raw).ok_or(CoreError::MalformedRecord {
                index,
                field: "terminal.enableSet",
            })?,
        };

        records.push(CanonicalDeviceRecord {
            device_type: resolve_device_type(&device_type)?,
            enabled: row.enabled.map_or_else(EnabledValue::default, EnabledValue::Text),
            host: required(row.host, index, "host")?,
            name: record_name(row.name, index)?,
            description: row.description,
            terminal: TerminalConfig {
                port: None,
                connection_method: None,
                username: row.username.unwrap_or_default(),
                enable_set,
                use_insecure_algorithms: false,
                use_tunneling_if_jumphost: true,
                password: row.password.unwrap_or_default(),
                enable,
            },
        });
    }
    Ok(records)
}

// ── Files ───────────────────────────────────────────────────────────

/// Device-import file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

/// Read an import file in the given format.
pub fn read_devices_file(
    path: &Path,
    format: ImportFormat,
) -> Result<Vec<CanonicalDeviceRecord>, CoreError> {
    let reader = BufReader::new(File::open(path)?);
    let records = match format {
        ImportFormat::Json => read_devices_json(reader)?,
        ImportFormat::Csv => read_devices_csv(reader)?,
    };

    info!(
        path = %path.display(),
        format = format.label(),
        count = records.len(),
        "read device import file"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CSV_HEADER: &str = "name(mandatory),host(mandatory),deviceType(mandatory),enabled,\
terminal.username,terminal.password,terminal.enable,terminal.enableSet\n";

    #[test]
    fn csv_enabled_stays_text() {
        let input = format!("{CSV_HEADER}SW 1,10.0.0.1,IOS_XE,True,admin,x,y,true\n");

        let records = read_devices_csv(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name.as_str(), "sw_1");
        assert_eq!(record.enabled, EnabledValue::Text("True".into()));
        assert_eq!(record.description, None);
        assert_eq!(record.terminal.port, None);
        assert_eq!(record.terminal.connection_method, None);
        assert!(record.terminal.enable_set);
        assert_eq!(record.terminal.enable, "y");
    }

    #[test]
    fn csv_accepts_plain_headers_and_extra_columns() {
        let input = "name,host,deviceType,site\nrtr1,10.0.0.9,IOS_XR,lab\n";

        let records = read_devices_csv(input.as_bytes()).unwrap();

        assert_eq!(records[0].device_type, DeviceType::IosXr);
        assert_eq!(records[0].enabled, EnabledValue::Bool(true));
        assert!(!records[0].terminal.enable_set);
    }

    #[test]
    fn csv_missing_host_is_malformed() {
        let input = format!("{CSV_HEADER}sw1,10.0.0.1,IOS_XE,true,,,,\nsw2,,IOS_XE,true,,,,\n");

        let err = read_devices_csv(input.as_bytes()).unwrap_err();

        assert!(
            matches!(err, CoreError::MalformedRecord { index: 1, field: "host" }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn csv_bad_enable_set_is_malformed() {
        let input = format!("{CSV_HEADER}sw1,10.0.0.1,IOS_XE,true,u,p,e,sometimes\n");

        let err = read_devices_csv(input.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            CoreError::MalformedRecord {
                field: "terminal.enableSet",
                ..
            }
        ));
    }

    #[test]
    fn unknown_device_type_is_rejected() {
        let input = r#"[{"deviceType": "IOS-XE", "host": "h", "name": "n", "terminal": {}}]"#;

        let err = read_devices_json(input.as_bytes()).unwrap_err();

        assert!(
            matches!(err, CoreError::UnknownDeviceType { ref value } if value == "IOS-XE"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn json_requires_terminal_block() {
        let input = r#"[{"deviceType": "IOS_XE", "host": "h", "name": "n"}]"#;

        let err = read_devices_json(input.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            CoreError::MalformedRecord {
                index: 0,
                field: "terminal"
            }
        ));
    }

    #[test]
    fn json_name_is_recanonicalized() {
        let input = r#"[{"deviceType": "IOS_XE", "enabled": true, "host": "10.0.0.1",
                         "name": "Core SW", "terminal": {"username": "admin"}}]"#;

        let records = read_devices_json(input.as_bytes()).unwrap();

        assert_eq!(records[0].name.as_str(), "core_sw");
        assert_eq!(records[0].enabled, EnabledValue::Bool(true));
    }

    #[test]
    fn csv_empty_enabled_cell_stays_empty_text() {
        let input = format!("{CSV_HEADER}sw1,10.0.0.1,IOS_XE,,u,p,e,true\n");

        let records = read_devices_csv(input.as_bytes()).unwrap();

        assert_eq!(records[0].enabled, EnabledValue::Text(String::new()));
    }

    #[test]
    fn csv_unknown_device_type_is_rejected() {
        let input = format!("{CSV_HEADER}sw1,10.0.0.1,CATOS,true,u,p,e,true\n");

        let err = read_devices_csv(input.as_bytes()).unwrap_err();

        assert!(
            matches!(err, CoreError::UnknownDeviceType { ref value } if value == "CATOS"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn json_missing_name_or_device_type_is_malformed() {
        let no_name = r#"[{"deviceType": "IOS_XE", "host": "h", "terminal": {}}]"#;
        let err = read_devices_json(no_name.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedRecord { index: 0, field: "name" }),
            "unexpected error: {err:?}"
        );

        let no_type = r#"[{"deviceType": "IOS_XE", "host": "h", "name": "a", "terminal": {}},
                          {"host": "h", "name": "b", "terminal": {}}]"#;
        let err = read_devices_json(no_type.as_bytes()).unwrap_err();
        assert!(
            matches!(err, CoreError::MalformedRecord { index: 1, field: "deviceType" }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_devices_file(Path::new("/nonexistent/devices.json"), ImportFormat::Json)
            .unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
