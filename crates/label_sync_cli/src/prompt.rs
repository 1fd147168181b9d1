//! Terminal backends for [`InputResolver`].

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use label_sync_core::{Error, InputResolver, SyncResult, TextRule};
use tracing::debug;

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

/// Asks the operator on the terminal. Text answers are re-asked until they
/// pass their rule.
pub struct DialoguerResolver {
    theme: ColorfulTheme,
}

impl DialoguerResolver {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

impl InputResolver for DialoguerResolver {
    fn select(&self, prompt: &str, choices: &[String]) -> SyncResult<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(0)
            .items(choices)
            .interact()
            .map_err(prompt_error)?;
        Ok(choices[index].clone())
    }

    fn multi_select(&self, prompt: &str, choices: &[String]) -> SyncResult<Vec<String>> {
        let indices = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .interact()
            .map_err(prompt_error)?;
        Ok(indices.into_iter().map(|i| choices[i].clone()).collect())
    }

    fn text(&self, prompt: &str, default: Option<&str>, rule: TextRule) -> SyncResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(move |value: &String| rule.check(value));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> SyncResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// Never asks. Used with `--no-input`, where every value must come from the
/// command line.
#[derive(Debug, Default)]
pub struct NonInteractiveResolver;

impl NonInteractiveResolver {
    fn missing(prompt: &str) -> Error {
        Error::Validation(format!(
            "a value is required but prompting is disabled ({prompt})"
        ))
    }
}

impl InputResolver for NonInteractiveResolver {
    fn select(&self, prompt: &str, _choices: &[String]) -> SyncResult<String> {
        Err(Self::missing(prompt))
    }

    fn multi_select(&self, prompt: &str, _choices: &[String]) -> SyncResult<Vec<String>> {
        Err(Self::missing(prompt))
    }

    fn text(&self, prompt: &str, default: Option<&str>, rule: TextRule) -> SyncResult<String> {
        // A default that passes its rule is as good as an answer; without one
        // a prompt that accepts anything takes the empty string
        let value = default.unwrap_or_default();
        if (default.is_some() || rule == TextRule::Any) && rule.check(value).is_ok() {
            debug!(prompt = prompt, value = value, "Using default without prompting");
            return Ok(value.to_string());
        }
        Err(Self::missing(prompt))
    }

    fn confirm(&self, prompt: &str, default: bool) -> SyncResult<bool> {
        debug!(prompt = prompt, answer = default, "Answering confirmation with its default");
        Ok(default)
    }
}
