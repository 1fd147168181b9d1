use super::*;

#[test]
fn test_resolve_bare_name_uses_default_owner() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");

    assert_eq!(repo.owner, "equinor");
    assert_eq!(repo.name, "ops-actions");
}

#[test]
fn test_resolve_full_name_keeps_owner() {
    let repo = RepositoryRef::resolve("equinor", "octocat/Hello-World");

    assert_eq!(repo.owner, "octocat");
    assert_eq!(repo.name, "Hello-World");
}

#[test]
fn test_resolve_malformed_full_name_falls_back_to_default_owner() {
    let repo = RepositoryRef::resolve("equinor", "/ops-actions");

    assert_eq!(repo.owner, "equinor");
    assert_eq!(repo.name, "ops-actions");
}

#[test]
fn test_display() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");
    assert_eq!(repo.to_string(), "equinor/ops-actions");
}

#[test]
fn test_repository_path() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");
    assert_eq!(repo.path().unwrap(), "/repos/equinor/ops-actions");
}

#[test]
fn test_labels_collection_path() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");
    assert_eq!(
        repo.labels_path(None).unwrap(),
        "/repos/equinor/ops-actions/labels"
    );
}

#[test]
fn test_label_path_encodes_spaces() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");
    assert_eq!(
        repo.labels_path(Some("good first issue")).unwrap(),
        "/repos/equinor/ops-actions/labels/good%20first%20issue"
    );
}

#[test]
fn test_label_path_encodes_slashes_inside_the_name() {
    let repo = RepositoryRef::resolve("equinor", "ops-actions");
    assert_eq!(
        repo.labels_path(Some("area/ci")).unwrap(),
        "/repos/equinor/ops-actions/labels/area%2Fci"
    );
}
