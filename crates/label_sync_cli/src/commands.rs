//! Subcommands of the label-sync CLI and the rendering of their results.

use clap::{Args, Subcommand};
use colored::Colorize;
use github_client::LabelClient;
use label_sync_core::{
    Action, CreateLabelArgs, DeleteLabelArgs, EditLabelArgs, InputResolver, LabelSync,
    RepoOutcome, SyncReport,
};
use tracing::info;

use crate::errors::Error;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// Exit code when at least one repository could not be updated
pub const EXIT_PARTIAL_FAILURE: i32 = 2;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply every label in the label list to one repository
    #[command(alias = "r")]
    Repo(RepoArgs),

    /// Add a label to the label list and to every repository
    #[command(alias = "c")]
    Create(CreateArgs),

    /// Change a label in the label list and in every repository
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Remove labels from the label list and from every repository
    #[command(alias = "d")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository to apply the labels to
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new label
    #[arg(short, long)]
    pub name: Option<String>,

    /// Color of the new label, six hex digits without leading #
    #[arg(short, long)]
    pub color: Option<String>,

    /// Description of the new label
    #[arg(short = 'd', long = "desc")]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Current name of the label to edit
    #[arg(short, long)]
    pub name: Option<String>,

    /// New name of the label
    #[arg(short = 'N', long)]
    pub new_name: Option<String>,

    /// New color, six hex digits without leading #
    #[arg(short, long)]
    pub color: Option<String>,

    /// New description
    #[arg(short = 'd', long = "desc")]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Label to delete, may be repeated
    #[arg(short = 'n', long = "name")]
    pub names: Vec<String>,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub force: bool,
}

impl From<CreateArgs> for CreateLabelArgs {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            color: args.color,
            description: args.description,
        }
    }
}

impl From<EditArgs> for EditLabelArgs {
    fn from(args: EditArgs) -> Self {
        Self {
            name: args.name,
            new_name: args.new_name,
            color: args.color,
            description: args.description,
        }
    }
}

impl From<DeleteArgs> for DeleteLabelArgs {
    fn from(args: DeleteArgs) -> Self {
        Self {
            names: args.names,
            force: args.force,
        }
    }
}

/// Runs one subcommand to completion.
pub async fn execute<C, R>(sync: &LabelSync<C, R>, command: Commands) -> Result<SyncReport, Error>
where
    C: LabelClient,
    R: InputResolver,
{
    info!(command = ?command, "Running command");
    let report = match command {
        Commands::Repo(args) => sync.create_all_labels_in_repo(args.name).await?,
        Commands::Create(args) => sync.create_label_everywhere(args.into()).await?,
        Commands::Edit(args) => sync.edit_label_everywhere(args.into()).await?,
        Commands::Delete(args) => sync.delete_label_everywhere(args.into()).await?,
    };
    Ok(report)
}

/// The status line printed for one outcome.
pub fn outcome_line(outcome: &RepoOutcome) -> String {
    let RepoOutcome {
        repo,
        label,
        action,
    } = outcome;
    match action {
        Action::Created => format!("Created label {label} in repo {repo}"),
        Action::Updated => format!("Updated label {label} in repo {repo}"),
        Action::Deleted => format!("Deleted label {label} from repo {repo}"),
        Action::AlreadyAbsent => format!("Label {label} not found in repo {repo}"),
        Action::Failed(reason) => format!("Error syncing label {label} in repo {repo}: {reason}"),
    }
}

/// Prints one colored status line per outcome.
pub fn print_report(report: &SyncReport) {
    if report.cancelled {
        println!("{}", "Aborting...".yellow());
        return;
    }

    for outcome in &report.outcomes {
        let line = outcome_line(outcome);
        match outcome.action {
            Action::Created | Action::Updated | Action::Deleted => println!("{}", line.green()),
            Action::AlreadyAbsent => println!("{}", line.yellow()),
            Action::Failed(_) => println!("{}", line.red()),
        }
    }
}

/// Process exit code for a procedure that ran to completion.
pub fn exit_code(report: &SyncReport) -> i32 {
    if report.is_success() {
        0
    } else {
        EXIT_PARTIAL_FAILURE
    }
}
