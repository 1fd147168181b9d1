//! Tests for the local state store.

use super::*;
use tempfile::TempDir;

fn label(name: &str) -> LabelRecord {
    LabelRecord::new(name, "ededed", format!("{name} label")).unwrap()
}

#[test]
fn test_load_repos() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join(DEFAULT_REPO_LIST_FILE),
        r#"["ops-actions", "Backend"]"#,
    )
    .unwrap();
    let store = StateStore::new(temp_dir.path());

    let repos = store.load_repos().unwrap();

    assert_eq!(repos, vec!["ops-actions", "Backend"]);
}

#[test]
fn test_load_repos_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());

    let result = store.load_repos();

    match result {
        Err(Error::StateRead { path, .. }) => {
            assert!(path.ends_with(DEFAULT_REPO_LIST_FILE));
        }
        other => panic!("Expected StateRead error, got {other:?}"),
    }
}

#[test]
fn test_load_labels_malformed_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join(DEFAULT_LABEL_LIST_FILE), "[{\"name\": ").unwrap();
    let store = StateStore::new(temp_dir.path());

    let result = store.load_labels();

    assert!(matches!(result, Err(Error::StateParse { .. })));
}

#[test]
fn test_save_repos_sorts_case_insensitively() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());

    store
        .save_repos(vec![
            "zeta".to_string(),
            "Alpha".to_string(),
            "beta".to_string(),
            "alpha".to_string(),
        ])
        .unwrap();

    let repos = store.load_repos().unwrap();
    assert_eq!(repos, vec!["Alpha", "alpha", "beta", "zeta"]);
}

#[test]
fn test_save_repos_drops_exact_duplicates() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());

    store
        .save_repos(vec!["beta".to_string(), "alpha".to_string(), "beta".to_string()])
        .unwrap();

    assert_eq!(store.load_repos().unwrap(), vec!["alpha", "beta"]);
}

#[test]
fn test_save_labels_sorts_by_lowercased_name() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());

    store
        .save_labels(vec![label("question"), label("Bug"), label("area/ci")])
        .unwrap();

    let names: Vec<String> = store
        .load_labels()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["area/ci", "Bug", "question"]);
}

#[test]
fn test_save_labels_writes_four_space_indent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());

    store.save_labels(vec![label("bug")]).unwrap();

    let content = fs::read_to_string(store.label_list_path()).unwrap();
    let expected = "[\n    {\n        \"name\": \"bug\",\n        \"color\": \"ededed\",\n        \"description\": \"bug label\"\n    }\n]\n";
    assert_eq!(content, expected);
}

#[test]
fn test_save_replaces_existing_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());
    fs::write(store.repo_list_path(), r#"["old-one", "old-two", "old-three"]"#).unwrap();

    store.save_repos(vec!["new".to_string()]).unwrap();

    assert_eq!(store.load_repos().unwrap(), vec!["new"]);
    // No temporary files are left behind
    let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing_dir = temp_dir.path().join("does-not-exist");
    let store = StateStore::new(&missing_dir);

    let result = store.save_repos(vec!["repo".to_string()]);

    assert!(matches!(result, Err(Error::StateWrite { .. })));
    assert!(!missing_dir.exists());
}

#[test]
fn test_custom_file_names() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::with_file_names(temp_dir.path(), "repos.json", "labels.json");

    store.save_repos(vec!["repo".to_string()]).unwrap();
    store.save_labels(vec![label("bug")]).unwrap();

    assert!(temp_dir.path().join("repos.json").exists());
    assert!(temp_dir.path().join("labels.json").exists());
}

#[cfg(unix)]
#[test]
fn test_save_keeps_existing_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = StateStore::new(temp_dir.path());
    fs::write(store.label_list_path(), "[]").unwrap();
    fs::set_permissions(store.label_list_path(), fs::Permissions::from_mode(0o644)).unwrap();

    store.save_labels(vec![label("bug")]).unwrap();

    let mode = fs::metadata(store.label_list_path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o644);
}
