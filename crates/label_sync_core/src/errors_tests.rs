//! Tests for error types

use super::*;
use std::error::Error as StdError;

#[test]
fn test_not_found_display_is_the_message() {
    let err = Error::NotFound("Repository ops-actions not found. Check for typos.".to_string());
    assert_eq!(
        err.to_string(),
        "Repository ops-actions not found. Check for typos."
    );
}

#[test]
fn test_empty_field() {
    let err = Error::empty_field("name");

    assert_eq!(err.to_string(), "Invalid input: name cannot be empty");
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_state_read_error_names_the_file() {
    let err = Error::StateRead {
        path: PathBuf::from("label_list.json"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };

    assert_eq!(
        err.to_string(),
        "Failed to read state file label_list.json: No such file or directory"
    );
    assert!(err.source().is_some());
    assert!(err.is_state_error());
}

#[test]
fn test_state_parse_error() {
    let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let err = Error::StateParse {
        path: PathBuf::from("repo_list.json"),
        source,
    };

    assert!(err.to_string().starts_with("State file repo_list.json is not valid"));
    assert!(err.is_state_error());
}

#[test]
fn test_remote_error_wraps_client_error() {
    let err: Error = github_client::Error::NotFound.into();

    assert_eq!(err.to_string(), "GitHub request failed: Resource not found");
    assert!(!err.is_state_error());
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
