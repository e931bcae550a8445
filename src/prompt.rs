//! User interaction.
//! The configuration resolver only talks to the [`Prompter`] trait; the terminal
//! implementation is backed by dialoguer.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Capability interface over interactive prompts.
pub trait Prompter {
    /// Single choice; returns the index of the selected option.
    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize>;

    /// Zero or more choices; returns the selected indices in option order.
    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<usize>>;

    /// Free text with an optional default.
    fn text(&self, message: &str, default: Option<&str>) -> Result<String>;

    /// Yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

fn prompt_error(message: &str, err: dialoguer::Error) -> Error {
    Error::ValidationError(format!("failed to read answer for '{message}': {err}"))
}

/// Terminal prompter.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, message: &str, options: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }

    fn multi_select(&self, message: &str, options: &[String]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(message)
            .items(options)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }

    fn text(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| prompt_error(message, e))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(message, e))
    }
}
