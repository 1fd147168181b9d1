//! Local state: the tracked repository list and the desired label list.
//!
//! Both documents are read whole and rewritten whole. Writes go to a
//! temporary file next to the target which is then renamed over it, so a
//! failed write never leaves a truncated document behind.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::{Error, SyncResult};
use crate::label::LabelRecord;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Default file name of the tracked repository list
pub const DEFAULT_REPO_LIST_FILE: &str = "repo_list.json";

/// Default file name of the desired label list
pub const DEFAULT_LABEL_LIST_FILE: &str = "label_list.json";

const JSON_INDENT: &[u8] = b"    ";

/// Reads and writes the two JSON state documents.
#[derive(Debug, Clone)]
pub struct StateStore {
    repo_list_path: PathBuf,
    label_list_path: PathBuf,
}

impl StateStore {
    /// Creates a store over the default file names inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_file_names(dir, DEFAULT_REPO_LIST_FILE, DEFAULT_LABEL_LIST_FILE)
    }

    /// Creates a store over custom file names inside `dir`.
    pub fn with_file_names(dir: impl AsRef<Path>, repo_list: &str, label_list: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            repo_list_path: dir.join(repo_list),
            label_list_path: dir.join(label_list),
        }
    }

    pub fn repo_list_path(&self) -> &Path {
        &self.repo_list_path
    }

    pub fn label_list_path(&self) -> &Path {
        &self.label_list_path
    }

    /// Loads the tracked repository identifiers in file order.
    ///
    /// # Errors
    ///
    /// Returns `Error::StateRead` if the file is missing or unreadable and
    /// `Error::StateParse` if it is not a JSON array of strings.
    pub fn load_repos(&self) -> SyncResult<Vec<String>> {
        read_json(&self.repo_list_path)
    }

    /// Sorts the repository identifiers case-insensitively and persists them.
    ///
    /// Exact duplicates are dropped.
    pub fn save_repos(&self, mut repos: Vec<String>) -> SyncResult<()> {
        repos.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        repos.dedup();
        write_json_atomic(&self.repo_list_path, &repos)?;
        info!(count = repos.len(), path = ?self.repo_list_path, "Saved repository list");
        Ok(())
    }

    /// Loads the desired label records in file order.
    ///
    /// # Errors
    ///
    /// Returns `Error::StateRead` if the file is missing or unreadable and
    /// `Error::StateParse` if it is not a JSON array of label records.
    pub fn load_labels(&self) -> SyncResult<Vec<LabelRecord>> {
        read_json(&self.label_list_path)
    }

    /// Sorts the label records case-insensitively by name and persists them.
    pub fn save_labels(&self, mut labels: Vec<LabelRecord>) -> SyncResult<()> {
        labels.sort_by(|a, b| sort_key(&a.name).cmp(&sort_key(&b.name)));
        write_json_atomic(&self.label_list_path, &labels)?;
        info!(count = labels.len(), path = ?self.label_list_path, "Saved label list");
        Ok(())
    }
}

/// Lowercased first, exact string second, so the order is total and stable.
fn sort_key(value: &str) -> (String, &str) {
    (value.to_lowercase(), value)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> SyncResult<T> {
    debug!("Loading state from {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| Error::StateRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::StateParse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> SyncResult<()> {
    debug!("Saving state to {:?}", path);

    let write_error = |source| Error::StateWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| write_error(e.into()))?;
    buffer.push(b'\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(&buffer).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;

    // The temp file is created 0600; keep whatever mode the target had
    match fs::metadata(path) {
        Ok(existing) => temp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(write_error)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(write_error(e)),
    }
    temp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
