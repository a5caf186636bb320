//! Operator prompts.
//!
//! The menu and the command handlers only talk to a [`Prompter`], so tests
//! can drive a whole session from a script.

use secrecy::SecretString;

use crate::error::{CliError, prompt_err};

pub trait Prompter {
    /// Visible single-line input; may be empty.
    fn input(&mut self, prompt: &str) -> Result<String, CliError>;

    /// Hidden single-line input.
    fn secret(&mut self, prompt: &str) -> Result<SecretString, CliError>;
}

/// Interactive prompts on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String, CliError> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)
    }

    fn secret(&mut self, prompt: &str) -> Result<SecretString, CliError> {
        rpassword::prompt_password(format!("{prompt}: "))
            .map(SecretString::from)
            .map_err(prompt_err)
    }
}

#[cfg(test)]
pub(crate) mod script {
    use std::collections::VecDeque;

    use secrecy::SecretString;

    use super::Prompter;
    use crate::error::CliError;

    /// Answers prompts from a fixed list and records what was asked.
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| (*a).to_owned()).collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Result<String, CliError> {
            self.asked.push(prompt.to_owned());
            self.answers.pop_front().ok_or_else(|| CliError::Prompt {
                message: format!("script exhausted at '{prompt}'"),
            })
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, prompt: &str) -> Result<String, CliError> {
            self.next(prompt)
        }

        fn secret(&mut self, prompt: &str) -> Result<SecretString, CliError> {
            self.next(prompt).map(SecretString::from)
        }
    }
}
