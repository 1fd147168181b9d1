//! Label synchronization procedures.
//!
//! This module provides the [`LabelSync`] component, which keeps the labels
//! of every tracked repository in line with the local label list.
//!
//! Every procedure follows the same order: read local state, resolve missing
//! inputs, update local state, persist it, then walk the repositories. Local
//! state is persisted before any remote call, so an interrupted run leaves
//! the local lists already advanced.

use std::collections::HashSet;

use github_client::{DeleteOutcome, LabelClient, LabelLookup};
use tracing::{info, warn};

use crate::errors::{Error, SyncResult};
use crate::label::{LabelRecord, NO_HEX_HINT};
use crate::resolver::{supplied_or_prompt, InputResolver, TextRule};
use crate::store::StateStore;

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;

/// Choice appended to the repository picker to enter a repository that is
/// not tracked yet.
pub const OTHER_CHOICE: &str = "Other";

/// Values for a new label supplied up front. Missing values are prompted for.
#[derive(Debug, Clone, Default)]
pub struct CreateLabelArgs {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// Values for a label edit supplied up front. Missing values are prompted
/// for, defaulting to the current ones.
#[derive(Debug, Clone, Default)]
pub struct EditLabelArgs {
    /// Current name of the label to edit
    pub name: Option<String>,
    pub new_name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// Labels to delete. An empty list means the operator picks them.
#[derive(Debug, Clone, Default)]
pub struct DeleteLabelArgs {
    pub names: Vec<String>,
    /// Skips the confirmation question
    pub force: bool,
}

/// What happened to one label in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
    Deleted,
    AlreadyAbsent,
    /// The remote call failed; the message comes from the client error
    Failed(String),
}

/// Outcome of one label operation against one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoOutcome {
    pub repo: String,
    pub label: String,
    pub action: Action,
}

/// Result of a synchronization procedure.
///
/// Contains one outcome per remote label operation, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub outcomes: Vec<RepoOutcome>,

    /// The operator declined the confirmation; nothing was changed
    pub cancelled: bool,
}

impl SyncReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    fn cancelled() -> Self {
        Self {
            outcomes: Vec::new(),
            cancelled: true,
        }
    }

    fn record(&mut self, repo: &str, label: &str, action: Action) {
        match &action {
            Action::Failed(reason) => {
                warn!(repo = repo, label = label, error = %reason, "Label operation failed")
            }
            other => info!(repo = repo, label = label, action = ?other, "Label operation done"),
        }
        self.outcomes.push(RepoOutcome {
            repo: repo.to_string(),
            label: label.to_string(),
            action,
        });
    }

    /// Number of outcomes matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Action) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.action)).count()
    }

    /// Number of failed remote operations.
    pub fn failed(&self) -> usize {
        self.count(|a| matches!(a, Action::Failed(_)))
    }

    /// Returns true if no remote operation failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Returns true if any label was created, updated or deleted.
    pub fn has_changes(&self) -> bool {
        self.count(|a| matches!(a, Action::Created | Action::Updated | Action::Deleted)) > 0
    }
}

/// Runs the label synchronization procedures.
///
/// # Examples
///
/// ```rust,ignore
/// let sync = LabelSync::new(github_client, DialoguerResolver::new(), StateStore::new("."));
///
/// let report = sync.create_label_everywhere(CreateLabelArgs {
///     name: Some("bug".to_string()),
///     color: Some("d73a4a".to_string()),
///     description: Some("Something isn't working".to_string()),
/// }).await?;
/// println!("{} repositories failed", report.failed());
/// ```
pub struct LabelSync<C, R> {
    client: C,
    resolver: R,
    store: StateStore,
}

impl<C: LabelClient, R: InputResolver> LabelSync<C, R> {
    /// Creates a new LabelSync.
    pub fn new(client: C, resolver: R, store: StateStore) -> Self {
        Self {
            client,
            resolver,
            store,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Applies every label in the label list to one repository.
    ///
    /// The repository comes from `repo`, or is picked from the tracked list,
    /// or is typed in after picking [`OTHER_CHOICE`]. A repository that is
    /// not tracked yet is added to the list once GitHub confirms it exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if GitHub does not know the repository; the
    /// repository list is left unchanged in that case.
    pub async fn create_all_labels_in_repo(&self, repo: Option<String>) -> SyncResult<SyncReport> {
        let mut repos = self.store.load_repos()?;
        let labels = self.store.load_labels()?;

        let repo = match repo {
            Some(repo) => repo,
            None => self.pick_repository(&repos)?,
        };
        if repo.is_empty() {
            return Err(Error::empty_field("repository"));
        }

        if !self.client.repository_exists(&repo).await? {
            return Err(Error::NotFound(format!(
                "Repository {repo} not found. Check for typos."
            )));
        }

        // `backend` and `<org>/backend` are the same repository
        let target = self.client.repository(&repo);
        let tracked = repos
            .iter()
            .find(|known| self.client.repository(known) == target)
            .cloned();
        let repo = match tracked {
            Some(known) => known,
            None => {
                info!(repo = repo, "Tracking new repository");
                repos.push(repo.clone());
                self.store.save_repos(repos)?;
                repo
            }
        };

        let existing: HashSet<String> = self
            .client
            .list_labels(&repo)
            .await?
            .into_iter()
            .map(|label| label.name)
            .collect();

        info!(
            repo = repo,
            label_count = labels.len(),
            "Applying labels to repository"
        );

        let mut report = SyncReport::new();
        for label in &labels {
            let action = if existing.contains(&label.name) {
                self.update(&repo, &label.name, label).await
            } else {
                self.create(&repo, label).await
            };
            report.record(&repo, &label.name, action);
        }

        Ok(report)
    }

    /// Adds a label to the label list and to every tracked repository.
    ///
    /// A label with the same name already in the list is replaced. In each
    /// repository the label is created, or updated when it already exists.
    pub async fn create_label_everywhere(&self, args: CreateLabelArgs) -> SyncResult<SyncReport> {
        let mut labels = self.store.load_labels()?;
        let repos = self.store.load_repos()?;

        let name = supplied_or_prompt(
            &self.resolver,
            "name",
            args.name,
            "What's the name of the new label?",
            None,
            TextRule::NonEmpty,
        )?;
        let color = supplied_or_prompt(
            &self.resolver,
            "color",
            args.color,
            &format!("What's the color of the new label? {NO_HEX_HINT}"),
            None,
            TextRule::HexColor,
        )?;
        let description = supplied_or_prompt(
            &self.resolver,
            "description",
            args.description,
            "What's the description of the new label?",
            None,
            TextRule::Any,
        )?;
        let label = LabelRecord::new(name, color, description)?;

        labels.retain(|existing| existing.name != label.name);
        labels.push(label.clone());
        self.store.save_labels(labels)?;

        let mut report = SyncReport::new();
        for repo in &repos {
            let action = self.reconcile(repo, &label.name, &label).await;
            report.record(repo, &label.name, action);
        }

        Ok(report)
    }

    /// Changes a label in the label list and in every tracked repository.
    ///
    /// Repositories are searched by the label's current name. Where it is
    /// missing the edited label is created instead.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the named label is not in the label list
    /// - `Error::NoChange` if the edit leaves the label as it is
    /// - `Error::Validation` if the new name belongs to another label
    pub async fn edit_label_everywhere(&self, args: EditLabelArgs) -> SyncResult<SyncReport> {
        let mut labels = self.store.load_labels()?;
        let repos = self.store.load_repos()?;

        let names: Vec<String> = labels.iter().map(|label| label.name.clone()).collect();
        let current_name = match args.name {
            Some(name) => name,
            None => {
                if names.is_empty() {
                    return Err(Error::NotFound(
                        "The label list is empty. Nothing to edit.".to_string(),
                    ));
                }
                self.resolver.select("Select label to edit", &names)?
            }
        };
        let index = names
            .iter()
            .position(|name| *name == current_name)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Label {current_name} not found. Check for typos or add it to the label list."
                ))
            })?;
        let current = labels[index].clone();

        let new_name = match args.new_name {
            Some(new_name) => new_name,
            None => self.resolver.text(
                &format!("What's the new name of {current_name}?"),
                Some(current.name.as_str()),
                TextRule::Any,
            )?,
        };
        let color = supplied_or_prompt(
            &self.resolver,
            "color",
            args.color,
            &format!("What's the new color of {current_name}? {NO_HEX_HINT}"),
            Some(current.color.as_str()),
            TextRule::HexColor,
        )?;
        let description = supplied_or_prompt(
            &self.resolver,
            "description",
            args.description,
            &format!("What's the new description of {current_name}?"),
            Some(current.description.as_str()),
            TextRule::Any,
        )?;

        // An empty name keeps the current one
        let new_name = if new_name.is_empty() {
            current.name.clone()
        } else {
            new_name
        };
        let edited = LabelRecord::new(new_name, color, description)?;

        if edited == current {
            return Err(Error::NoChange(format!(
                "No changes made for {current_name}. Aborting"
            )));
        }
        if edited.name != current.name && names.contains(&edited.name) {
            return Err(Error::Validation(format!(
                "Cannot rename {current_name} to {}: a label with that name already exists",
                edited.name
            )));
        }

        labels[index] = edited.clone();
        self.store.save_labels(labels)?;

        info!(
            label = current_name,
            new_name = edited.name,
            color = edited.color,
            "Editing label in all repositories"
        );

        let mut report = SyncReport::new();
        for repo in &repos {
            let action = self.reconcile(repo, &current.name, &edited).await;
            report.record(repo, &current.name, action);
        }

        Ok(report)
    }

    /// Removes labels from the label list and from every tracked repository.
    ///
    /// Unless `args.force` is set the operator must confirm first. Declining
    /// returns a cancelled report and changes nothing.
    pub async fn delete_label_everywhere(&self, args: DeleteLabelArgs) -> SyncResult<SyncReport> {
        let mut labels = self.store.load_labels()?;
        let repos = self.store.load_repos()?;

        let names = if args.names.is_empty() {
            let choices: Vec<String> = labels.iter().map(|label| label.name.clone()).collect();
            self.resolver
                .multi_select("Select labels to delete (use space to select)", &choices)?
        } else {
            args.names
        };
        if names.is_empty() {
            return Err(Error::Validation(
                "No labels selected for deletion".to_string(),
            ));
        }

        if !args.force {
            let sure = self.resolver.confirm(
                &format!("This will delete label(s) {}. Continue?", names.join(", ")),
                false,
            )?;
            if !sure {
                info!("Deletion declined, nothing changed");
                return Ok(SyncReport::cancelled());
            }
        }

        labels.retain(|label| !names.contains(&label.name));
        self.store.save_labels(labels)?;

        let mut report = SyncReport::new();
        for name in &names {
            for repo in &repos {
                let action = match self.client.delete_label(repo, name).await {
                    Ok(DeleteOutcome::Deleted) => Action::Deleted,
                    Ok(DeleteOutcome::AlreadyAbsent) => Action::AlreadyAbsent,
                    Err(e) => Action::Failed(e.to_string()),
                };
                report.record(repo, name, action);
            }
        }

        Ok(report)
    }

    fn pick_repository(&self, repos: &[String]) -> SyncResult<String> {
        let mut choices = repos.to_vec();
        choices.push(OTHER_CHOICE.to_string());

        let picked = self.resolver.select(
            "Select the repository to create labels in. Select 'Other' to add a new one",
            &choices,
        )?;
        if picked != OTHER_CHOICE {
            return Ok(picked);
        }

        self.resolver.text(
            "Enter the name of the new repository",
            None,
            TextRule::NonEmpty,
        )
    }

    /// Makes the label known in `repo` as `lookup_name` match `label`.
    async fn reconcile(&self, repo: &str, lookup_name: &str, label: &LabelRecord) -> Action {
        match self.client.get_label(repo, lookup_name).await {
            Ok(LabelLookup::Found) => self.update(repo, lookup_name, label).await,
            Ok(LabelLookup::NotFound) => self.create(repo, label).await,
            Err(e) => Action::Failed(e.to_string()),
        }
    }

    async fn create(&self, repo: &str, label: &LabelRecord) -> Action {
        match self.client.create_label(repo, &label.to_remote()).await {
            Ok(()) => Action::Created,
            Err(e) => Action::Failed(e.to_string()),
        }
    }

    async fn update(&self, repo: &str, current_name: &str, label: &LabelRecord) -> Action {
        match self
            .client
            .update_label(repo, current_name, &label.to_update())
            .await
        {
            Ok(()) => Action::Updated,
            Err(e) => Action::Failed(e.to_string()),
        }
    }
}
