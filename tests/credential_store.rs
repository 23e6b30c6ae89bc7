mod common;

use std::fs;

use serde_json::{Value, json};
use sid_url_manager::domain::ports::{
    ConfigScope, CredentialKey, CredentialStore, load_credentials, save_credentials,
};
use sid_url_manager::infrastructure::credentials::{JsonFileCredentialStore, MemoryCredentialStore};

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileCredentialStore::new(dir.path().join("settings.json"), None);

    save_credentials(&store, &common::credentials(), ConfigScope::Global).unwrap();

    let loaded = load_credentials(&store).unwrap();
    assert_eq!(loaded.auth_id(), common::AUTH_ID);
    assert_eq!(loaded.auth_key(), common::AUTH_KEY);
}

#[test]
fn test_file_store_keeps_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"editor.fontSize": 14}"#).unwrap();

    let store = JsonFileCredentialStore::new(&path, None);
    save_credentials(&store, &common::credentials(), ConfigScope::Global).unwrap();

    let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["editor.fontSize"], json!(14));
    assert_eq!(saved["urlShortener.authId"], common::AUTH_ID);
    assert_eq!(saved["urlShortener.authKey"], common::AUTH_KEY);
}

#[test]
fn test_workspace_value_shadows_global() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("global.json");
    let workspace = dir.path().join("workspace.json");
    fs::write(
        &global,
        r#"{"urlShortener.authId": "global-id", "urlShortener.authKey": "global-key"}"#,
    )
    .unwrap();

    let store = JsonFileCredentialStore::new(&global, Some(workspace));
    store
        .set(CredentialKey::AuthId, "workspace-id", ConfigScope::Workspace)
        .unwrap();

    let loaded = load_credentials(&store).unwrap();
    assert_eq!(loaded.auth_id(), "workspace-id");
    assert_eq!(loaded.auth_key(), "global-key");
}

#[test]
fn test_half_configured_pair_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"urlShortener.authId": "only-id", "urlShortener.authKey": "  "}"#)
        .unwrap();

    let store = JsonFileCredentialStore::new(&path, None);
    assert_eq!(store.get(CredentialKey::AuthId).as_deref(), Some("only-id"));
    assert!(store.get(CredentialKey::AuthKey).is_none());
    assert!(load_credentials(&store).is_none());
}

#[test]
fn test_malformed_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let store = JsonFileCredentialStore::new(&path, None);
    assert!(load_credentials(&store).is_none());
    assert!(
        store
            .set(CredentialKey::AuthId, "id", ConfigScope::Global)
            .is_err()
    );
}

#[test]
fn test_memory_store_workspace_shadows_global() {
    let store = MemoryCredentialStore::with_credentials(&common::credentials());
    store
        .set(CredentialKey::AuthKey, "override", ConfigScope::Workspace)
        .unwrap();

    let loaded = load_credentials(&store).unwrap();
    assert_eq!(loaded.auth_id(), common::AUTH_ID);
    assert_eq!(loaded.auth_key(), "override");
}
