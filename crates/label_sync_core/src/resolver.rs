//! Input resolution for values the operator did not pass on the command line.
//!
//! The synchronization procedures never talk to a terminal directly. They
//! ask an [`InputResolver`] for every missing value, which lets the CLI plug
//! in an interactive backend and lets tests plug in scripted answers.

use crate::errors::{Error, SyncResult};
use crate::label::{is_hex_color, NO_HEX_HINT};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Rule a free-text answer must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    /// Anything, including the empty string.
    Any,
    /// Anything but the empty string.
    NonEmpty,
    /// Exactly six hex digits.
    HexColor,
}

impl TextRule {
    /// Checks `input` against the rule, returning the message to show the
    /// operator when it fails.
    pub fn check(&self, input: &str) -> Result<(), String> {
        match self {
            TextRule::Any => Ok(()),
            TextRule::NonEmpty if input.is_empty() => Err("Value cannot be empty".to_string()),
            TextRule::NonEmpty => Ok(()),
            TextRule::HexColor if is_hex_color(input) => Ok(()),
            TextRule::HexColor => Err(format!("'{input}' is not a valid color. {NO_HEX_HINT}")),
        }
    }
}

/// Source of values the operator has not supplied up front.
///
/// Every call blocks until an answer is available. Interactive
/// implementations re-ask until a text answer satisfies its [`TextRule`].
pub trait InputResolver {
    /// Picks exactly one of `choices`.
    fn select(&self, prompt: &str, choices: &[String]) -> SyncResult<String>;

    /// Picks any number of `choices`, possibly none.
    fn multi_select(&self, prompt: &str, choices: &[String]) -> SyncResult<Vec<String>>;

    /// Reads a line of text. `default` is returned when the operator enters nothing.
    fn text(&self, prompt: &str, default: Option<&str>, rule: TextRule) -> SyncResult<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> SyncResult<bool>;
}

/// Uses `supplied` when present, otherwise asks `resolver`.
///
/// A supplied value is checked against `rule` once; there is nobody to
/// re-ask, so a failure is an `Error::Validation` naming `field`.
pub fn supplied_or_prompt<R: InputResolver + ?Sized>(
    resolver: &R,
    field: &str,
    supplied: Option<String>,
    prompt: &str,
    default: Option<&str>,
    rule: TextRule,
) -> SyncResult<String> {
    match supplied {
        Some(value) => {
            rule.check(&value)
                .map_err(|reason| Error::Validation(format!("{field}: {reason}")))?;
            Ok(value)
        }
        None => resolver.text(prompt, default, rule),
    }
}
