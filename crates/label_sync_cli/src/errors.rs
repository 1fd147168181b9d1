use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the label-sync CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when an explicitly named configuration file is
    /// missing, unreadable, or not valid TOML.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A synchronization procedure failed.
    #[error(transparent)]
    Sync(#[from] label_sync_core::Error),

    /// The GitHub client could not be created.
    #[error("GitHub client error: {0}")]
    Client(#[from] github_client::Error),

    /// No personal access token was found.
    #[error("No GitHub token found. Set {0} in the environment or in a .env file.")]
    MissingToken(&'static str),
}

impl Error {
    /// Renders the error followed by every underlying cause, one per line.
    pub fn chain(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            rendered.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        rendered
    }
}
