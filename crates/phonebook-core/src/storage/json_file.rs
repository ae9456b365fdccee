//! JSON file backend for the phonebook.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::directory::Directory;
use super::traits::DirectoryStore;
use crate::error::{PhonebookError, Result};
use crate::fs::write_atomic;

/// Phonebook kept as one pretty-printed JSON object in a UTF-8 file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DirectoryStore for JsonFileStore {
    fn load(&self) -> Result<Directory> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no phonebook file, starting empty");
            return Ok(Directory::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            PhonebookError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let directory: Directory = serde_json::from_str(&contents).map_err(|e| {
            PhonebookError::Serialization(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = directory.len(),
            "phonebook loaded"
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> Result<()> {
        let bytes = to_pretty_json(directory)?;
        write_atomic(&self.path, &bytes).map_err(|e| {
            PhonebookError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = directory.len(),
            "phonebook saved"
        );
        Ok(())
    }
}

/// Four-space indented JSON with non-ASCII text left unescaped.
pub fn to_pretty_json(directory: &Directory) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    directory.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Contact;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_pretty_json_layout() {
        let directory: Directory = vec![Contact::new("John", "Smith", "89991234567", None)]
            .into_iter()
            .collect();
        let text = String::from_utf8(to_pretty_json(&directory).unwrap()).unwrap();
        let expected = "{\n    \"John Smith\": {\n        \"Name\": \"John\",\n        \"Surname\": \"Smith\",\n        \"Phone\": \"89991234567\",\n        \"Birth date\": \"-\"\n    }\n}\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let mut directory = Directory::new();
        directory.insert(Contact::new("Ёжик", "Туманов", "89991234567", None));
        let text = String::from_utf8(to_pretty_json(&directory).unwrap()).unwrap();
        assert!(text.contains("\"Ёжик Туманов\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PhonebookError::Serialization(_)));
    }
}
