//! Label domain types.
//!
//! This module contains the request and response shapes used by the GitHub
//! labels endpoints (`/repos/{owner}/{repo}/labels`).

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label as stored in a GitHub repository.
///
/// The same shape is used as the body of a create request. GitHub returns
/// `null` for labels without a description, hence the `Option`.
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label {
///     name: "bug".to_string(),
///     color: "d73a4a".to_string(),
///     description: Some("Something isn't working".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// The hex color of the label, without the leading `#`
    pub color: String,

    /// A short description of the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a PATCH request against an existing label.
///
/// The label is addressed in the URL by its current name; `new_name`
/// carries the name it should have afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelUpdate {
    pub new_name: String,
    pub color: String,
    pub description: String,
}

/// Result of looking up a single label by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLookup {
    Found,
    NotFound,
}

/// Result of a label deletion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// GitHub answered 204, the label is gone
    Deleted,
    /// GitHub answered 404, the label was not there to begin with
    AlreadyAbsent,
}
