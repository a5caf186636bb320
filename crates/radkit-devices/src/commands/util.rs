//! Shared helpers for command handlers.

use std::path::PathBuf;

use tabled::Tabled;

use radkit_devices_core::{CanonicalDeviceRecord, Credentials, write_devices_json};

use super::Context;
use crate::error::CliError;
use crate::output;

// ── Selection ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ChoiceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Parse a 1-based index typed by the operator into a 0-based one.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, CliError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|i| (1..=len).contains(i))
        .map(|i| i - 1)
        .ok_or_else(|| CliError::Selection {
            input: input.trim().to_owned(),
            max: len,
        })
}

/// List `items` as a table and let the operator pick one by index.
pub fn select<'t, T>(
    ctx: &mut Context<'_>,
    noun: &'static str,
    items: &'t [T],
    describe: impl Fn(&T) -> (String, String),
) -> Result<&'t T, CliError> {
    if items.is_empty() {
        return Err(CliError::NothingToSelect { what: noun });
    }

    let rows: Vec<ChoiceRow> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (name, id) = describe(item);
            ChoiceRow {
                index: i + 1,
                name,
                id,
            }
        })
        .collect();
    ctx.say(&output::render_table(&rows))?;

    let answer = ctx.input(&format!("Enter {noun} index (1 - {})", items.len()))?;
    let index = parse_selection(&answer, items.len())?;
    items.get(index).ok_or(CliError::Selection {
        input: answer,
        max: items.len(),
    })
}

// ── Prompts ─────────────────────────────────────────────────────────

/// SSH credentials shared by every record of the batch.
pub fn prompt_credentials(ctx: &mut Context<'_>) -> Result<Credentials, CliError> {
    let username = ctx.input("  SSH Username")?;
    let password = ctx.secret("  SSH Password")?;
    let enable_secret = ctx.secret("  Enable Secret")?;
    Ok(Credentials {
        username,
        password,
        enable_secret,
    })
}

/// File path prompt; an empty answer is rejected.
pub fn prompt_path(ctx: &mut Context<'_>, prompt: &str) -> Result<PathBuf, CliError> {
    let answer = ctx.input(prompt)?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(CliError::Prompt {
            message: "a file name is required".into(),
        });
    }
    Ok(PathBuf::from(trimmed))
}

// ── Device JSON ─────────────────────────────────────────────────────

/// Prompt for credentials and an output file, normalize, and write the
/// device-import JSON.
pub fn write_records(
    ctx: &mut Context<'_>,
    normalize: impl FnOnce(&Credentials) -> Vec<CanonicalDeviceRecord>,
) -> Result<(), CliError> {
    ctx.step("Step 5 - Prepare data for JSON")?;
    let credentials = prompt_credentials(ctx)?;
    let path = prompt_path(ctx, "  Enter Output JSON file")?;

    let records = normalize(&credentials);
    if records.is_empty() {
        ctx.say("No matching devices found.")?;
    }

    write_devices_json(&path, &records)?;
    ctx.say(&format!(
        "Devices written to {} ({} devices)",
        path.display(),
        records.len()
    ))
}
