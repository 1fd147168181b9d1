use std::{io, path::PathBuf};

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Result type for label synchronization operations
pub type SyncResult<T> = std::result::Result<T, Error>;

/// Errors raised by the label synchronization procedures.
///
/// Failures of a single remote mutation inside a per-repository loop are not
/// raised; they are recorded in the [`SyncReport`](crate::SyncReport).
#[derive(Error, Debug)]
pub enum Error {
    /// A repository or label that had to exist does not.
    #[error("{0}")]
    NotFound(String),

    /// An input value was rejected (bad color, empty name, missing value).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An edit would leave the label exactly as it is.
    #[error("{0}")]
    NoChange(String),

    /// A state file could not be read.
    #[error("Failed to read state file {}: {source}", path.display())]
    StateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A state file does not hold the expected JSON document.
    #[error("State file {} is not valid: {source}", path.display())]
    StateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A state file could not be written. The previous content is untouched.
    #[error("Failed to write state file {}: {source}", path.display())]
    StateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A GitHub call outside of a per-repository loop failed.
    #[error("GitHub request failed: {0}")]
    Remote(#[from] github_client::Error),

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl Error {
    /// Creates a validation error for a field that must not be empty.
    pub fn empty_field(field: &str) -> Self {
        Error::Validation(format!("{field} cannot be empty"))
    }

    /// Returns true if the error comes from reading, parsing or writing local state.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Error::StateRead { .. } | Error::StateParse { .. } | Error::StateWrite { .. }
        )
    }
}
