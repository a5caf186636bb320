//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Build RADkit device-import files and per-switch host vars from Meraki
/// Dashboard or Catalyst Center inventory, and upload device lists to a
/// RADkit Service.
#[derive(Debug, Parser)]
#[command(name = "radkit-devices", version, about, long_about = None)]
pub struct Cli {
    /// Output directory for the per-switch YAML files
    /// [default: ../ansible/device_vars, or `output_dir` from config.toml]
    #[arg(long, env = "RADKIT_DEVICES_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
