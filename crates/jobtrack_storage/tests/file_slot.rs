use std::fs;

use jobtrack_storage::{FileSlot, StorageError, StorageSlot};
use tempfile::TempDir;

const KEY: &str = "jobApplications";

#[test]
fn first_write_creates_data_dir() {
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path().join("data").join("nested"), KEY).unwrap();
    assert!(!slot.dir().exists());

    assert!(slot.read().unwrap().is_none());
    slot.write("[]").unwrap();

    assert!(slot.dir().is_dir());
    assert_eq!(slot.path(), slot.dir().join("jobApplications.json"));
    assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
}

#[test]
fn write_replaces_whole_value_and_leaves_no_staging_files() {
    let temp = TempDir::new().unwrap();
    let slot = FileSlot::new(temp.path(), KEY).unwrap();

    slot.write(r#"[{"id":"1"},{"id":"2"}]"#).unwrap();
    slot.write("[]").unwrap();

    assert_eq!(fs::read_to_string(slot.path()).unwrap(), "[]");
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["jobApplications.json"]);
}

#[test]
fn slots_with_different_keys_are_independent() {
    let temp = TempDir::new().unwrap();
    let apps = FileSlot::new(temp.path(), KEY).unwrap();
    let archive = FileSlot::new(temp.path(), "archive").unwrap();

    apps.write("[1]").unwrap();

    assert!(archive.read().unwrap().is_none());
    archive.write("[2]").unwrap();
    assert_eq!(apps.read().unwrap().as_deref(), Some("[1]"));
}

#[test]
fn write_into_file_path_fails_without_touching_neighbours() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let slot = FileSlot::new(&blocker, KEY).unwrap();
    assert!(matches!(slot.write("[]"), Err(StorageError::Directory(_))));
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
    assert!(!temp.path().join("jobApplications.json").exists());
}

#[test]
fn path_like_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    for key in ["../escape", "a/b", ""] {
        assert!(matches!(
            FileSlot::new(temp.path(), key),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
