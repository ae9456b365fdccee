use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use phonebook_core::storage::{Contact, ContactFilter, Directory, DirectoryStore, JsonFileStore};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn sample_directory() -> Directory {
    vec![
        Contact::new("John", "Smith", "89991234567", Some("01.01.2000".to_string())),
        Contact::new("Ann", "Lee", "89990000000", None),
        Contact::new("Пётр", "Иванов", "89995554433", Some("12.04.1961".to_string())),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_save_load_round_trip() {
    let temp = TempFile::new("phonebook_round_trip");
    let store = JsonFileStore::new(&temp.path);
    let directory = sample_directory();

    store.save(&directory).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");

    assert_eq!(loaded, directory);
}

#[test]
fn test_save_overwrites_previous_document() {
    let temp = TempFile::new("phonebook_overwrite");
    let store = JsonFileStore::new(&temp.path);
    let mut directory = sample_directory();
    store.save(&directory).expect("first save should succeed");

    directory.remove("Ann Lee");
    store.save(&directory).expect("second save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.len(), 2);
    assert!(!loaded.contains_key("Ann Lee"));
}

#[test]
fn test_saved_document_uses_display_labels_and_dash() {
    let temp = TempFile::new("phonebook_labels");
    let store = JsonFileStore::new(&temp.path);
    store.save(&sample_directory()).expect("save should succeed");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&temp.path).expect("read should succeed"))
            .expect("saved file should be JSON");
    assert_eq!(value["Ann Lee"]["Birth date"], "-");
    assert_eq!(value["John Smith"]["Phone"], "89991234567");
    assert_eq!(value["Пётр Иванов"]["Name"], "Пётр");
}

#[test]
fn test_find_after_reload() {
    let temp = TempFile::new("phonebook_find");
    let store = JsonFileStore::new(&temp.path);
    store.save(&sample_directory()).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");

    let filter = ContactFilter::from_inputs("john", "smith", "89991234567", "01.01.2000");
    let found = loaded.find(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, "John Smith");

    assert!(loaded.find(&ContactFilter::default()).is_empty());
}
