//! Integration tests for organization and descendant queries.

mod helpers;

use folderhub::{Folder, FolderDriver, FolderService, OrgId};

use helpers::{default_org, folder, names, other_org};

#[test]
fn test_folders_by_org_id_valid_org() {
    let service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "beta"),
        Folder::new("gamma", other_org(), "gamma"),
    ]);

    assert_eq!(
        service.folders_by_org_id(default_org()),
        vec![folder("alpha", "alpha"), folder("beta", "beta")]
    );
}

#[test]
fn test_folders_by_org_id_unparseable_org() {
    let service = FolderService::new(vec![folder("alpha", "alpha"), folder("beta", "beta")]);
    let org = OrgId::from_str_or_nil(&format!("{}.", helpers::DEFAULT_ORG_ID));

    assert!(service.folders_by_org_id(org).is_empty());
}

#[test]
fn test_folders_by_org_id_is_repeatable() {
    let service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "alpha.beta"),
    ]);

    let first = service.folders_by_org_id(default_org());
    let second = service.folders_by_org_id(default_org());
    assert_eq!(first, second);
}

#[test]
fn test_all_child_folders_nested() {
    let service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "alpha.beta"),
        folder("gamma", "alpha.beta.gamma"),
    ]);

    assert_eq!(
        names(&service.all_child_folders(default_org(), "alpha")),
        vec!["beta", "gamma"]
    );
}

#[test]
fn test_all_child_folders_emits_each_subtree_before_next_sibling() {
    let service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("bravo", "alpha.bravo"),
        folder("charlie", "alpha.charlie"),
        folder("delta", "alpha.bravo.delta"),
        folder("echo", "alpha.charlie.echo"),
    ]);

    assert_eq!(
        names(&service.all_child_folders(default_org(), "alpha")),
        vec!["bravo", "delta", "charlie", "echo"]
    );
}

#[test]
fn test_all_child_folders_wrong_org() {
    let service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "alpha.beta"),
    ]);

    assert!(service.all_child_folders(other_org(), "alpha").is_empty());
    assert!(service.all_child_folders(default_org(), "zulu").is_empty());
}

#[test]
fn test_folder_serializes_with_org_id() {
    let json = serde_json::to_value(folder("alpha", "alpha")).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "alpha",
            "org_id": helpers::DEFAULT_ORG_ID,
            "path": "alpha",
        })
    );
}
