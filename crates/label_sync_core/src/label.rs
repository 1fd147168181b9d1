//! Label records as tracked in the local label list.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, SyncResult};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-fA-F0-9]{6}$").expect("hex color pattern is valid"));

/// Hint appended to every color prompt.
pub const NO_HEX_HINT: &str = "Expects hex code without leading #";

/// A label definition, mirrored between `label_list.json` and every tracked repository.
///
/// The name is the identity of a label; two records with the same name are
/// the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Label name.
    pub name: String,

    /// Label color (hex code without #).
    pub color: String,

    /// Label description.
    #[serde(default)]
    pub description: String,
}

impl LabelRecord {
    /// Creates a label record, validating the name and color.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the name is empty or the color is not
    /// six hex digits.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> SyncResult<Self> {
        let record = Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        };
        validate_name(&record.name)?;
        validate_color(&record.color)?;
        Ok(record)
    }

    /// The create request body for this label.
    pub fn to_remote(&self) -> github_client::Label {
        github_client::Label {
            name: self.name.clone(),
            color: self.color.clone(),
            description: Some(self.description.clone()),
        }
    }

    /// The update request body that turns an existing label into this one.
    pub fn to_update(&self) -> github_client::LabelUpdate {
        github_client::LabelUpdate {
            new_name: self.name.clone(),
            color: self.color.clone(),
            description: self.description.clone(),
        }
    }
}

/// Returns true if `color` is exactly six hex digits, in either case.
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Checks that a label color is six hex digits.
///
/// # Errors
///
/// Returns `Error::Validation` otherwise.
pub fn validate_color(color: &str) -> SyncResult<()> {
    if is_hex_color(color) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "'{color}' is not a valid color. {NO_HEX_HINT}"
        )))
    }
}

/// Checks that a label name is not empty.
pub fn validate_name(name: &str) -> SyncResult<()> {
    if name.is_empty() {
        return Err(Error::empty_field("name"));
    }
    Ok(())
}
