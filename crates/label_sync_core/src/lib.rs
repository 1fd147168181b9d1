//! Keeps the labels of a set of GitHub repositories in line with one
//! locally maintained label list.
//!
//! The local state lives in two JSON documents, the tracked repository list
//! and the desired label list (see [`StateStore`]). The procedures on
//! [`LabelSync`] change that state and then replay the change against every
//! tracked repository through a [`github_client::LabelClient`].

pub mod errors;
pub use errors::{Error, SyncResult};

pub mod label;
pub use label::{is_hex_color, LabelRecord, NO_HEX_HINT};

pub mod resolver;
pub use resolver::{supplied_or_prompt, InputResolver, TextRule};

pub mod store;
pub use store::{StateStore, DEFAULT_LABEL_LIST_FILE, DEFAULT_REPO_LIST_FILE};

pub mod sync;
pub use sync::{
    Action, CreateLabelArgs, DeleteLabelArgs, EditLabelArgs, LabelSync, RepoOutcome, SyncReport,
    OTHER_CHOICE,
};
