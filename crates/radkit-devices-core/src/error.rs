// ── Core error types ──
//
// Errors surfaced by the normalization, import/export and upload
// pipelines. Transport-layer failures from `radkit_devices_api` arrive
// through the `From` impl as `Api`; the upload session wraps them in
// `Upload` so callers can tell a failed RADkit session apart.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Record errors ────────────────────────────────────────────────
    #[error("Unknown device type: {value}")]
    UnknownDeviceType { value: String },

    #[error("Malformed record {index}: missing or invalid `{field}`")]
    MalformedRecord { index: usize, field: &'static str },

    // ── Serialization / IO ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ── Remote services ──────────────────────────────────────────────
    #[error("Error while connecting to RADkit service or creating devices: {0}")]
    Upload(#[source] radkit_devices_api::Error),

    #[error(transparent)]
    Api(#[from] radkit_devices_api::Error),
}

impl CoreError {
    /// Whether the error came from a remote service rather than local data.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Upload(_) | Self::Api(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_names_index_and_field() {
        let err = CoreError::MalformedRecord {
            index: 3,
            field: "host",
        };
        assert_eq!(
            err.to_string(),
            "Malformed record 3: missing or invalid `host`"
        );
    }

    #[test]
    fn upload_error_keeps_operator_message() {
        let err = CoreError::Upload(radkit_devices_api::Error::Authentication {
            message: "login failed".into(),
        });
        assert!(err.is_remote());
        assert!(
            err.to_string()
                .starts_with("Error while connecting to RADkit service or creating devices:")
        );
    }
}
