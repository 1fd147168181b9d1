//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub API
//! through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_label(&repo, &label).await {
///     Ok(()) => println!("Label created"),
///     Err(Error::NotFound) => eprintln!("Repository does not exist"),
///     Err(Error::UnexpectedStatus(code, msg)) => eprintln!("GitHub answered {code}: {msg}"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic API request failure.
    ///
    /// This error occurs when a request never produced a GitHub response, for
    /// example because of a connection failure or an unparseable URI.
    #[error("API request failed")]
    ApiError(),

    /// The GitHub client could not be built from the supplied credentials.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// A request path could not be built from the repository and label names.
    #[error("Failed to build request path")]
    InvalidPath,

    /// The requested resource was not found.
    ///
    /// GitHub answers 404 both for resources that do not exist and for
    /// resources the token is not allowed to see.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// GitHub answered with a status code the operation does not handle.
    ///
    /// Parameters: (status code, message from GitHub)
    #[error("GitHub returned status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

impl Error {
    /// Maps a raw HTTP status from GitHub to an error.
    pub(crate) fn from_status(status: http::StatusCode) -> Self {
        match status {
            http::StatusCode::NOT_FOUND => Error::NotFound,
            http::StatusCode::TOO_MANY_REQUESTS => Error::RateLimitExceeded,
            other => Error::UnexpectedStatus(
                other.as_u16(),
                other.canonical_reason().unwrap_or("unknown").to_string(),
            ),
        }
    }
}
