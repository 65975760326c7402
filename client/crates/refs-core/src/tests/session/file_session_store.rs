use crate::{FileSessionStore, SESSION_KEY, SessionCredential, SessionStore};

use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileSessionStore {
    FileSessionStore::new(temp.path().join("storage.json"))
}

#[test]
fn given_missing_file_when_read_then_none() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    assert!(store.read().unwrap().is_none());
}

#[test]
fn given_written_credential_when_read_then_same_value() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let credential = SessionCredential::from_login("admin", "secret");

    store.write(&credential).unwrap();

    assert_eq!(store.read().unwrap(), Some(credential));
}

#[test]
fn given_written_credential_when_reopened_then_persists() {
    let temp = TempDir::new().unwrap();
    store_in(&temp)
        .write(&SessionCredential::from_stored("abc"))
        .unwrap();

    let reopened = store_in(&temp);

    assert_eq!(
        reopened.read().unwrap(),
        Some(SessionCredential::from_stored("abc"))
    );
}

#[test]
fn given_credential_when_written_then_stored_under_fixed_key() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.write(&SessionCredential::from_stored("abc")).unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json[SESSION_KEY], "abc");
}

#[test]
fn given_other_entries_when_write_and_clear_then_preserved() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), r#"{"theme":"dark"}"#).unwrap();

    store.write(&SessionCredential::from_stored("abc")).unwrap();
    store.clear().unwrap();

    let contents = std::fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["theme"], "dark");
    assert!(json.get(SESSION_KEY).is_none());
    assert!(store.read().unwrap().is_none());
}

#[test]
fn given_missing_file_when_clear_then_ok_and_no_file_created() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.clear().unwrap();

    assert!(!store.path().exists());
}

#[test]
fn given_corrupted_file_when_read_then_none_and_backed_up() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "{not json").unwrap();

    assert!(store.read().unwrap().is_none());

    assert!(!store.path().exists());
    assert_eq!(
        std::fs::read_to_string(store.backup_path()).unwrap(),
        "{not json"
    );
}

#[test]
fn given_corrupted_file_when_write_then_original_kept_in_backup() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "[1, 2, 3]").unwrap();

    store.write(&SessionCredential::from_stored("abc")).unwrap();

    assert_eq!(
        store.read().unwrap(),
        Some(SessionCredential::from_stored("abc"))
    );
    assert_eq!(
        store.backup_path(),
        temp.path().join("storage.json.bak")
    );
    assert_eq!(
        std::fs::read_to_string(store.backup_path()).unwrap(),
        "[1, 2, 3]"
    );
}

#[test]
fn given_empty_file_when_read_then_none_without_backup() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "  \n").unwrap();

    assert!(store.read().unwrap().is_none());
    assert!(!store.backup_path().exists());
}

#[test]
fn given_nested_missing_dir_when_write_then_created() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("a/b/storage.json"));

    store.write(&SessionCredential::from_stored("abc")).unwrap();

    assert!(store.path().exists());
}

#[test]
fn given_custom_key_when_write_then_default_key_unset() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    let custom = FileSessionStore::with_key(&path, "otherToken");

    custom.write(&SessionCredential::from_stored("abc")).unwrap();

    assert!(FileSessionStore::new(&path).read().unwrap().is_none());
    assert!(custom.read().unwrap().is_some());
}

#[test]
fn given_write_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.write(&SessionCredential::from_stored("abc")).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty());
}
