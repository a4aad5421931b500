//! Integration tests for folder moves.

mod helpers;

use folderhub::{AppConfig, ErrorKind, Folder, FolderDriver, FolderService, MoveError};

use helpers::{
    assert_links_consistent, assert_paths_consistent, default_org, folder, init_tracing, names,
    other_org,
};

#[test]
fn test_move_to_itself() {
    init_tracing();
    let mut service = FolderService::new(vec![folder("alpha", "alpha")]);

    let err = service.move_folder("alpha", "alpha").unwrap_err();
    assert!(matches!(err, MoveError::SelfMove { .. }));
}

#[test]
fn test_move_invalid_source() {
    let mut service = FolderService::new(vec![folder("alpha", "alpha")]);

    let err = service.move_folder("beta", "alpha").unwrap_err();
    assert!(matches!(err, MoveError::SourceNotFound { .. }));
    assert_eq!(err.to_string(), "source folder does not exist: 'beta'");
}

#[test]
fn test_move_invalid_destination() {
    let mut service = FolderService::new(vec![folder("alpha", "alpha")]);

    let err = service.move_folder("alpha", "beta").unwrap_err();
    assert!(matches!(err, MoveError::DestinationNotFound { .. }));
}

#[test]
fn test_move_to_child() {
    let mut service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "alpha.beta"),
    ]);

    let err = service.move_folder("alpha", "beta").unwrap_err();
    assert!(matches!(err, MoveError::Cyclic { .. }));
}

#[test]
fn test_move_to_other_org() {
    let mut service = FolderService::new(vec![
        folder("alpha", "alpha"),
        Folder::new("beta", other_org(), "beta"),
    ]);

    let err = service.move_folder("alpha", "beta").unwrap_err();
    assert!(matches!(err, MoveError::CrossTenant { .. }));
}

#[test]
fn test_move_error_maps_to_app_error() {
    let mut service = FolderService::new(vec![folder("alpha", "alpha")]);

    let err: folderhub::AppError = service.move_folder("ghost", "alpha").unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_move_with_subfolder() {
    init_tracing();
    let mut service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("beta", "beta"),
        folder("charlie", "alpha.charlie"),
    ]);

    let result = service.move_folder("alpha", "beta").expect("move succeeds");

    assert_eq!(
        result,
        vec![
            folder("alpha", "beta.alpha"),
            folder("beta", "beta"),
            folder("charlie", "beta.alpha.charlie"),
        ]
    );
    assert_paths_consistent(&service);
    assert_links_consistent(&service);
}

#[test]
fn test_move_to_grandparent() {
    let mut service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("bravo", "alpha.bravo"),
        folder("charlie", "alpha.bravo.charlie"),
        folder("delta", "alpha.bravo.charlie.delta"),
    ]);

    let result = service.move_folder("charlie", "alpha").expect("move succeeds");

    assert_eq!(
        result,
        vec![
            folder("alpha", "alpha"),
            folder("bravo", "alpha.bravo"),
            folder("charlie", "alpha.charlie"),
            folder("delta", "alpha.charlie.delta"),
        ]
    );
    assert_paths_consistent(&service);
    assert_links_consistent(&service);
}

#[test]
fn test_sequence_of_moves_keeps_invariants() {
    let mut service = FolderService::new(vec![
        folder("alpha", "alpha"),
        folder("bravo", "alpha.bravo"),
        folder("charlie", "alpha.bravo.charlie"),
        folder("delta", "delta"),
        folder("echo", "delta.echo"),
        Folder::new("foxtrot", other_org(), "foxtrot"),
    ]);

    service.move_folder("bravo", "echo").expect("bravo under echo");
    service.move_folder("delta", "alpha").expect("delta under alpha");
    assert!(service.move_folder("alpha", "charlie").is_err());
    service.move_folder("charlie", "alpha").expect("charlie under alpha");

    assert_paths_consistent(&service);
    assert_links_consistent(&service);
    assert_eq!(
        names(&service.all_child_folders(default_org(), "alpha")),
        vec!["delta", "echo", "bravo", "charlie"]
    );
    assert_eq!(
        service.find_folder("bravo").map(|f| f.path),
        Some("alpha.delta.echo.bravo".to_string())
    );
    assert_eq!(
        service.folders_by_org_id(other_org()),
        vec![Folder::new("foxtrot", other_org(), "foxtrot")]
    );
}

#[test]
fn test_failed_move_round_trips() {
    let folders = vec![
        folder("alpha", "alpha"),
        folder("beta", "alpha.beta"),
        folder("gamma", "gamma"),
    ];
    let mut service = FolderService::new(folders.clone());

    assert!(service.move_folder("alpha", "beta").is_err());
    assert_eq!(service.all_folders(), folders);
    assert_eq!(service.folders_by_org_id(default_org()), folders);
}

#[test]
fn test_strict_config_rejects_duplicates() {
    let config = AppConfig::from_toml_str("[tree]\nreject_duplicate_names = true\n")
        .expect("valid config");
    let folders = vec![folder("alpha", "alpha"), folder("alpha", "beta.alpha")];

    let err = folderhub::service_from_config(folders, &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}
