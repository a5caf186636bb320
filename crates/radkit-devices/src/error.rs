//! CLI error types with miette diagnostics.
//!
//! Wraps `CoreError` / `ConfigError` and adds the menu's own failures with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use radkit_devices_config::ConfigError;
use radkit_devices_core::CoreError;
use radkit_devices_core::api::Error as ApiError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    // 2 is clap's usage error.
    pub const CONFIG: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Interactive ──────────────────────────────────────────────────
    #[error("Invalid selection '{input}'. Please select by index.")]
    #[diagnostic(
        code(radkit_devices::selection),
        help("Enter a number between 1 and {max}.")
    )]
    Selection { input: String, max: usize },

    #[error("No {what} available")]
    #[diagnostic(code(radkit_devices::empty))]
    NothingToSelect { what: &'static str },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(radkit_devices::prompt))]
    Prompt { message: String },

    // ── Pipelines / services ─────────────────────────────────────────
    #[error("Meraki Dashboard rejected the API key")]
    #[diagnostic(
        code(radkit_devices::meraki_auth),
        help(
            "Check the key under Organization > API & webhooks.\n\
             Set MERAKI_DASHBOARD_API_KEY or store it in the keyring as radkit-devices/meraki-api-key."
        )
    )]
    InvalidApiKey,

    #[error(transparent)]
    #[diagnostic(
        code(radkit_devices::core),
        help("Set RADKIT_DEVICES_LOG=debug for request details.")
    )]
    Core(CoreError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {source}")]
    #[diagnostic(
        code(radkit_devices::config),
        help("Check config.toml and RADKIT_DEVICES_* environment variables.\nExpected at: {path}")
    )]
    Config {
        #[source]
        source: ConfigError,
        path: String,
    },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(radkit_devices::io))]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(ApiError::InvalidApiKey) => Self::InvalidApiKey,
            other => Self::Core(other),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CoreError::from(err).into()
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => exit_code::CONFIG,
            _ => exit_code::GENERAL,
        }
    }
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt {
        message: e.to_string(),
    }
}
