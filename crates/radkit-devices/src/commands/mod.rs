//! Menu action handlers.

pub mod catalyst;
pub mod meraki;
pub mod upload;
pub mod util;

use std::io::Write;
use std::path::Path;

use secrecy::SecretString;

use radkit_devices_config::Config;

use crate::error::CliError;
use crate::output;
use crate::prompt::Prompter;

/// Everything an action needs: settings, prompts and the output stream.
pub struct Context<'a> {
    pub config: &'a Config,
    pub output_dir: &'a Path,
    pub prompter: &'a mut dyn Prompter,
    pub out: &'a mut dyn Write,
    pub color: bool,
    /// Non-interactive Meraki API key lookup (env, keyring).
    pub meraki_key: fn() -> Option<SecretString>,
}

impl Context<'_> {
    /// Print one line.
    pub fn say(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Print a step heading.
    pub fn step(&mut self, text: &str) -> Result<(), CliError> {
        output::step(&mut *self.out, self.color, text)?;
        Ok(())
    }

    pub fn input(&mut self, prompt: &str) -> Result<String, CliError> {
        self.prompter.input(prompt)
    }

    pub fn secret(&mut self, prompt: &str) -> Result<SecretString, CliError> {
        self.prompter.secret(prompt)
    }
}
