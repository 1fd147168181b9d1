//! Repository addressing.
//!
//! Repositories are tracked locally by short identifiers. This module turns
//! those identifiers into owner/name pairs and into API paths.

use std::fmt;

use url::Url;

use crate::Error;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

// Only used to get path segment encoding from `url`; never requested.
const PATH_ENCODING_BASE: &str = "https://api.github.com/";

/// Identifies a single GitHub repository.
///
/// # Examples
///
/// ```rust
/// use github_client::RepositoryRef;
///
/// let repo = RepositoryRef::resolve("my-org", "my-repo");
/// assert_eq!(repo.to_string(), "my-org/my-repo");
///
/// let repo = RepositoryRef::resolve("my-org", "other-org/their-repo");
/// assert_eq!(repo.owner, "other-org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// The owner of the repository (user or organization name)
    pub owner: String,
    /// The name of the repository
    pub name: String,
}

impl RepositoryRef {
    /// Resolves a tracked repository identifier.
    ///
    /// A bare name is taken to live in `default_owner`. An identifier that
    /// already has the `owner/name` form is used as given.
    pub fn resolve(default_owner: &str, identifier: &str) -> Self {
        match identifier.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Self {
                owner: owner.to_string(),
                name: name.to_string(),
            },
            _ => Self {
                owner: default_owner.to_string(),
                name: identifier.trim_matches('/').to_string(),
            },
        }
    }

    /// The API path of the repository itself.
    pub fn path(&self) -> Result<String, Error> {
        encode_path(&["repos", &self.owner, &self.name])
    }

    /// The API path of the repository's label collection, or of a single
    /// label when `label` is given.
    pub fn labels_path(&self, label: Option<&str>) -> Result<String, Error> {
        match label {
            Some(name) => encode_path(&["repos", &self.owner, &self.name, "labels", name]),
            None => encode_path(&["repos", &self.owner, &self.name, "labels"]),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Joins the segments into an absolute path, percent-encoding each one.
///
/// Label names may contain spaces, `/` or `#`, so they cannot be pasted into
/// the URL verbatim.
fn encode_path(segments: &[&str]) -> Result<String, Error> {
    let mut url = Url::parse(PATH_ENCODING_BASE).map_err(|_| Error::InvalidPath)?;
    url.path_segments_mut()
        .map_err(|_| Error::InvalidPath)?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}
