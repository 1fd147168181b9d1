//! Crate for interacting with the GitHub labels REST API.
//!
//! This crate provides a client for making authenticated requests to GitHub
//! with a personal access token, scoped to the label endpoints of repositories
//! that belong to one organization.

use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION};
use http::StatusCode;
use octocrab::{Octocrab, Result as OctocrabResult};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

pub mod errors;
pub use errors::Error;

pub mod label;
pub use label::{DeleteOutcome, Label, LabelLookup, LabelUpdate};

pub mod repository;
pub use repository::RepositoryRef;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Media type requested on every call.
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Default root of the GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const LABELS_PER_PAGE: u8 = 100;

/// Operations on the labels of a single repository.
///
/// Repositories are passed as tracked identifiers; see
/// [`RepositoryRef::resolve`] for how they are mapped to an owner and name.
#[async_trait]
pub trait LabelClient: Send + Sync {
    /// Resolves a tracked identifier to the repository it addresses.
    ///
    /// Two identifiers name the same repository iff they resolve equal.
    fn repository(&self, repo: &str) -> RepositoryRef;

    /// Checks whether the repository itself exists.
    ///
    /// # Errors
    ///
    /// Returns an error for any answer other than 200 or 404.
    async fn repository_exists(&self, repo: &str) -> Result<bool, Error>;

    /// Lists every label defined in the repository.
    async fn list_labels(&self, repo: &str) -> Result<Vec<Label>, Error>;

    /// Looks up a single label by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error for any answer other than 200 or 404.
    async fn get_label(&self, repo: &str, name: &str) -> Result<LabelLookup, Error>;

    /// Creates a new label in the repository.
    async fn create_label(&self, repo: &str, label: &Label) -> Result<(), Error>;

    /// Updates the label currently named `current_name`.
    ///
    /// The label is renamed when `update.new_name` differs from `current_name`.
    async fn update_label(
        &self,
        repo: &str,
        current_name: &str,
        update: &LabelUpdate,
    ) -> Result<(), Error>;

    /// Deletes the label named `name`.
    ///
    /// A missing label is not an error; it is reported as
    /// [`DeleteOutcome::AlreadyAbsent`].
    async fn delete_label(&self, repo: &str, name: &str) -> Result<DeleteOutcome, Error>;
}

/// A client for the GitHub labels API, authenticated with a personal access token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
    organization: String,
}

impl GitHubClient {
    /// Creates a new `GitHubClient`.
    ///
    /// # Arguments
    ///
    /// * `client` - An `Octocrab` instance, usually from [`create_token_client`].
    /// * `organization` - The owner used for repository identifiers without one.
    pub fn new(client: Octocrab, organization: impl Into<String>) -> Self {
        Self {
            client,
            organization: organization.into(),
        }
    }

    /// The organization bare repository identifiers are resolved against.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Issues a GET and returns only the status code.
    async fn get_status(&self, path: &str) -> Result<StatusCode, Error> {
        debug!("Making API call to: {}", path);
        let response = self.client._get(path).await.map_err(|e| {
            log_octocrab_error("Failed to send GET request", e);
            Error::ApiError()
        })?;
        Ok(response.status())
    }
}

#[derive(Debug, Serialize)]
struct ListLabelsParams {
    per_page: u8,
    page: u32,
}

#[async_trait]
impl LabelClient for GitHubClient {
    fn repository(&self, repo: &str) -> RepositoryRef {
        RepositoryRef::resolve(&self.organization, repo)
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn repository_exists(&self, repo: &str) -> Result<bool, Error> {
        let path = self.repository(repo).path()?;
        match self.get_status(&path).await? {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => {
                info!(repo = repo, "Repository not found");
                Ok(false)
            }
            status => Err(Error::from_status(status)),
        }
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn list_labels(&self, repo: &str) -> Result<Vec<Label>, Error> {
        let path = self.repository(repo).labels_path(None)?;

        let mut labels = Vec::new();
        let mut page = 1;
        loop {
            let params = ListLabelsParams {
                per_page: LABELS_PER_PAGE,
                page,
            };
            let response: OctocrabResult<Vec<Label>> =
                self.client.get(&path, Some(&params)).await;
            let batch = response.map_err(|e| map_octocrab_error("Failed to list labels", e))?;

            let last_page = batch.len() < usize::from(LABELS_PER_PAGE);
            labels.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        debug!(repo = repo, count = labels.len(), "Listed repository labels");
        Ok(labels)
    }

    #[instrument(skip(self), fields(repo = %repo, label = %name))]
    async fn get_label(&self, repo: &str, name: &str) -> Result<LabelLookup, Error> {
        let path = self.repository(repo).labels_path(Some(name))?;
        match self.get_status(&path).await? {
            StatusCode::OK => Ok(LabelLookup::Found),
            StatusCode::NOT_FOUND => Ok(LabelLookup::NotFound),
            status => Err(Error::from_status(status)),
        }
    }

    #[instrument(skip(self, label), fields(repo = %repo, label = %label.name))]
    async fn create_label(&self, repo: &str, label: &Label) -> Result<(), Error> {
        let path = self.repository(repo).labels_path(None)?;
        let response: OctocrabResult<Label> = self.client.post(path, Some(label)).await;
        match response {
            Ok(created) => {
                info!(repo = repo, label = created.name, "Created label");
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to create label", e)),
        }
    }

    #[instrument(skip(self, update), fields(repo = %repo, label = %current_name))]
    async fn update_label(
        &self,
        repo: &str,
        current_name: &str,
        update: &LabelUpdate,
    ) -> Result<(), Error> {
        let path = self.repository(repo).labels_path(Some(current_name))?;
        let response: OctocrabResult<Label> = self.client.patch(path, Some(update)).await;
        match response {
            Ok(updated) => {
                info!(
                    repo = repo,
                    label = current_name,
                    new_name = updated.name,
                    "Updated label"
                );
                Ok(())
            }
            Err(e) => Err(map_octocrab_error("Failed to update label", e)),
        }
    }

    #[instrument(skip(self), fields(repo = %repo, label = %name))]
    async fn delete_label(&self, repo: &str, name: &str) -> Result<DeleteOutcome, Error> {
        let path = self.repository(repo).labels_path(Some(name))?;
        debug!("Making API call to: {}", path);
        let response = self
            .client
            ._delete(path.as_str(), None::<&()>)
            .await
            .map_err(|e| {
                log_octocrab_error("Failed to send DELETE request", e);
                Error::ApiError()
            })?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(DeleteOutcome::Deleted),
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::AlreadyAbsent),
            status => {
                error!(
                    repo = repo,
                    label = name,
                    status = status.as_u16(),
                    "Unexpected status when deleting label"
                );
                Err(Error::from_status(status))
            }
        }
    }
}

/// Creates an `Octocrab` client that authenticates with a personal access token.
///
/// Every request carries `Authorization: token <PAT>` and asks for the v3
/// media type.
///
/// # Arguments
///
/// * `token` - The personal access token.
/// * `base_uri` - Root of the REST API, normally [`DEFAULT_API_BASE_URL`].
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URI is invalid or the client
/// cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, DEFAULT_API_BASE_URL};
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), github_client::Error> {
/// let token = SecretString::from("ghp_example".to_string());
/// let octocrab = create_token_client(&token, DEFAULT_API_BASE_URL)?;
/// let client = GitHubClient::new(octocrab, "my-org");
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &SecretString, base_uri: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| {
            error!(base_uri = base_uri, error = %e, "Invalid GitHub API base URI");
            Error::AuthError(format!("Invalid API base URI: {base_uri}"))
        })?
        .add_header(AUTHORIZATION, format!("token {}", token.expose_secret()))
        .add_header(ACCEPT, GITHUB_V3_MEDIA_TYPE.to_string())
        .build()
        .map_err(|e| {
            error!(error = ?e, "Failed to build Octocrab client");
            Error::AuthError("Failed to build the GitHub client.".to_string())
        })
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let mapped = match &e {
        octocrab::Error::GitHub { source, .. } => match source.status_code {
            StatusCode::NOT_FOUND => Error::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimitExceeded,
            status => Error::UnexpectedStatus(status.as_u16(), source.message.clone()),
        },
        _ => Error::ApiError(),
    };
    log_octocrab_error(message, e);
    mapped
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, .. } => error!(
            error_message = source.message,
            status = source.status_code.as_u16(),
            "{}. Received an error from GitHub",
            message
        ),
        octocrab::Error::Uri { source, .. } => error!(
            error_message = source.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, .. } => error!(
            error_message = source.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
