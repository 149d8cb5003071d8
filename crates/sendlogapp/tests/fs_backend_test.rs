use chrono::Utc;
use sendlogapp::error::SendlogError;
use sendlogapp::model::{Climb, ClimbFields, Discipline, FriendEdge, UserId};
use sendlogapp::store::backend::StorageBackend;
use sendlogapp::store::fs::FileStore;
use sendlogapp::store::fs_backend::FsBackend;
use sendlogapp::store::DataStore;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn climb(name: &str) -> Climb {
    Climb::new(
        UserId::from("alex"),
        ClimbFields::new(name, Discipline::Boulder, "V3", "Bishop"),
    )
}

#[test]
fn test_missing_documents_load_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load_climbs().unwrap().is_empty());
    assert!(backend.load_users().unwrap().is_empty());
    assert!(backend.load_friends().unwrap().is_empty());
}

#[test]
fn test_climbs_round_trip_through_disk() {
    let (dir, backend) = setup();
    let climb = climb("Roof");
    let mut climbs = HashMap::new();
    climbs.insert(climb.id, climb.clone());

    backend.save_climbs(&climbs).unwrap();

    assert!(dir.path().join("climbs.json").exists());
    let loaded = backend.load_climbs().unwrap();
    assert_eq!(loaded.get(&climb.id), Some(&climb));
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    let edges = vec![FriendEdge {
        user: UserId::from("alex"),
        friend: UserId::from("sam"),
        created_at: Utc::now(),
    }];
    backend.save_friends(&edges).unwrap();
    backend.save_friends(&edges).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_failed_write_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    // A non-empty directory where the document should go makes the write fail.
    let blocked = dir.path().join("climbs.json");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();

    let result = backend.save_climbs(&HashMap::new());
    assert!(matches!(result, Err(SendlogError::Io(_))));

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());
    backend.save_climbs(&HashMap::new()).unwrap();
    assert!(nested.join("climbs.json").exists());
}

#[test]
fn test_corrupt_document_is_a_serialization_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("climbs.json"), "{ not json").unwrap();
    assert!(matches!(
        backend.load_climbs(),
        Err(SendlogError::Serialization(_))
    ));
}

#[test]
fn test_legacy_climb_is_repaired_on_load() {
    let (dir, backend) = setup();
    let mut legacy = climb("Old");
    legacy.attempts = vec![sendlogapp::model::Attempt::new(
        3,
        Utc::now(),
        "from an older version",
        Default::default(),
    )];
    legacy.completed_at = Some(Utc::now());
    let mut value = serde_json::to_value(HashMap::from([(legacy.id, legacy.clone())])).unwrap();
    value[legacy.id.to_string()]
        .as_object_mut()
        .unwrap()
        .remove("attempt_counter");
    fs::write(dir.path().join("climbs.json"), value.to_string()).unwrap();

    let loaded = backend.load_climbs().unwrap();
    let repaired = &loaded[&legacy.id];
    assert_eq!(repaired.attempt_counter, 3);
    assert!(repaired.completed_at.is_none());
}

#[test]
fn test_legacy_sent_climb_gets_send_time_on_load() {
    let (dir, backend) = setup();
    let mut legacy = climb("Sent long ago");
    legacy.completed = true;
    let mut value = serde_json::to_value(HashMap::from([(legacy.id, legacy.clone())])).unwrap();
    value[legacy.id.to_string()]
        .as_object_mut()
        .unwrap()
        .remove("completed_at");
    fs::write(dir.path().join("climbs.json"), value.to_string()).unwrap();

    let loaded = backend.load_climbs().unwrap();
    let repaired = &loaded[&legacy.id];
    assert!(repaired.completed);
    assert_eq!(repaired.completed_at, Some(legacy.created_at));
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let alex = UserId::from("alex");
    {
        let mut store = FileStore::new_fs(dir.path().to_path_buf());
        store
            .register_user(&alex, "Alex", "alex@example.com")
            .unwrap();
        store
            .create_climb(&alex, ClimbFields::new("Roof", Discipline::Sport, "20", "Ceuse"))
            .unwrap();
    }

    let store = FileStore::new_fs(dir.path().to_path_buf());
    assert_eq!(store.data_dir(), dir.path());
    assert_eq!(store.load_catalogue(&alex).unwrap()[0].name, "Roof");
    assert_eq!(store.lookup_user_by_email("ALEX@example.com").unwrap().id, alex);
}
