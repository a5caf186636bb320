//! Interactive menu loop.

use radkit_devices_core::ImportFormat;

use crate::commands::{Context, catalyst, meraki, upload};
use crate::error::CliError;
use crate::output;

const MENU: &str = "\
Choose an action:
  a) Get devices from Meraki Dashboard and write to JSON file
  b) Get devices from Catalyst Center and write to JSON file
  c) Upload devices to RADkit service from JSON file
  d) Upload devices to RADkit service from CSV file
  e) Get VLAN list per device from Meraki Dashboard and write to YAML file(s)
  x) Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    MerakiDevices,
    CatalystDevices,
    UploadJson,
    UploadCsv,
    MerakiPorts,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "a" => Some(Self::MerakiDevices),
            "b" => Some(Self::CatalystDevices),
            "c" => Some(Self::UploadJson),
            "d" => Some(Self::UploadCsv),
            "e" => Some(Self::MerakiPorts),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

async fn dispatch(ctx: &mut Context<'_>, choice: MenuChoice) -> Result<(), CliError> {
    tracing::debug!(?choice, "dispatching menu action");
    match choice {
        MenuChoice::MerakiDevices => meraki::devices_to_json(ctx).await,
        MenuChoice::CatalystDevices => catalyst::devices_to_json(ctx).await,
        MenuChoice::UploadJson => upload::from_file(ctx, ImportFormat::Json).await,
        MenuChoice::UploadCsv => upload::from_file(ctx, ImportFormat::Csv).await,
        MenuChoice::MerakiPorts => meraki::ports_to_yaml(ctx).await,
        MenuChoice::Exit => Ok(()),
    }
}

/// Print a failed action and return to the menu.
fn report(ctx: &mut Context<'_>, err: CliError) -> Result<(), CliError> {
    match err {
        CliError::Selection { .. } | CliError::NothingToSelect { .. } => ctx.say(&err.to_string()),
        other => ctx.say(&format!("{:?}", miette::Report::new(other))),
    }
}

/// Run the menu until the operator exits or declines another action.
pub async fn run(ctx: &mut Context<'_>) -> Result<(), CliError> {
    output::banner(&mut *ctx.out, ctx.color)?;

    loop {
        ctx.say(MENU)?;
        let answer = ctx.input("Enter your choice (a - e, or x)")?;

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => break,
            Some(choice) => {
                if let Err(err) = dispatch(ctx, choice).await {
                    report(ctx, err)?;
                }
            }
            None => ctx.say("Invalid choice. Please choose a valid option.")?,
        }

        let again = ctx.input("Do you want to perform another action? (yes/no)")?;
        if !again.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }
    Ok(())
}
