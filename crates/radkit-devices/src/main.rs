mod cli;
mod commands;
mod error;
mod menu;
mod output;
mod prompt;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Context;
use crate::error::CliError;
use crate::prompt::TerminalPrompter;

/// Log filter variable; logs go to stderr so they never interleave with
/// the menu on stdout.
const LOG_ENV: &str = "RADKIT_DEVICES_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing();

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = radkit_devices_config::load_config().map_err(|source| CliError::Config {
        source,
        path: radkit_devices_config::config_path().display().to_string(),
    })?;
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    tracing::debug!(output_dir = %output_dir.display(), "starting session");

    let mut prompter = TerminalPrompter;
    let mut stdout = std::io::stdout();
    let mut ctx = Context {
        config: &config,
        output_dir: &output_dir,
        prompter: &mut prompter,
        out: &mut stdout,
        color: output::should_color(),
        meraki_key: radkit_devices_config::resolve_meraki_api_key,
    };

    menu::run(&mut ctx).await
}
