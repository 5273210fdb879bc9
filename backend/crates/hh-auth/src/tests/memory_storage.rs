use crate::{CredentialTable, MemoryStorage, SessionStorage};

#[test]
fn given_new_storage_when_load_then_empty() {
    let storage = MemoryStorage::new();

    let loaded = storage.load().unwrap();

    assert!(loaded.identity.is_none());
    assert!(!loaded.is_corrupted());
}

#[test]
fn given_saved_identity_when_load_then_roundtrips() {
    let storage = MemoryStorage::new();
    let identity = CredentialTable::builtin().accounts()[2].identity.clone();

    storage.save(&identity).unwrap();

    assert_eq!(storage.load().unwrap().identity, Some(identity));
    assert!(storage.raw().unwrap().contains("\"createdAt\""));
}

#[test]
fn given_garbage_record_when_load_then_reports_corruption() {
    let storage = MemoryStorage::with_raw("undefined");

    let loaded = storage.load().unwrap();

    assert!(loaded.identity.is_none());
    assert!(loaded.is_corrupted());
}

#[test]
fn given_saved_identity_when_clear_then_raw_gone() {
    let storage = MemoryStorage::new();
    let identity = CredentialTable::builtin().accounts()[0].identity.clone();
    storage.save(&identity).unwrap();

    storage.clear().unwrap();
    storage.clear().unwrap();

    assert_eq!(storage.raw(), None);
}
