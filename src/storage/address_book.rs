//! Address book repository for JSON storage
//!
//! Saves and loads the whole address book to a single JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ContactsError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json_optional, write_json_atomic};

const SCHEMA_VERSION: u32 = 1;

/// Serializable address book data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddressBookData {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Write the entire address book to `path`
pub fn save_book(book: &AddressBook, path: impl AsRef<Path>) -> Result<(), ContactsError> {
    let path = path.as_ref();
    let data = AddressBookData {
        schema_version: SCHEMA_VERSION,
        records: book.records().cloned().collect(),
    };

    write_json_atomic(path, &data)?;
    info!(path = %path.display(), contacts = book.len(), "saved address book");
    Ok(())
}

/// Read an address book from `path`, or `None` if there is no file yet
pub fn load_book(path: impl AsRef<Path>) -> Result<Option<AddressBook>, ContactsError> {
    let path = path.as_ref();
    let Some(data) = read_json_optional::<AddressBookData, _>(path)? else {
        debug!(path = %path.display(), "no saved address book");
        return Ok(None);
    };

    if data.schema_version > SCHEMA_VERSION {
        return Err(ContactsError::Storage(format!(
            "Unsupported address book schema version {} in {}",
            data.schema_version,
            path.display()
        )));
    }

    let book: AddressBook = data.records.into_iter().collect();
    info!(path = %path.display(), contacts = book.len(), "loaded address book");
    Ok(Some(book))
}

/// Repository for address book persistence
pub struct AddressBookRepository {
    path: PathBuf,
}

impl AddressBookRepository {
    /// Create a new address book repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved address book, or start with an empty one
    pub fn load_or_default(&self) -> Result<AddressBook, ContactsError> {
        Ok(load_book(&self.path)?.unwrap_or_default())
    }

    /// Save the address book to disk
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactsError> {
        save_book(book, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Name;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AddressBookRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("addressbook.json");
        let repo = AddressBookRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_book() -> AddressBook {
        let mut alice = Record::new(Name::new("Alice").unwrap());
        alice.add_phone("1234567890").unwrap();
        alice.add_phone("0000000000").unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_birthday("15.06.1990").unwrap();

        let mut bob = Record::new(Name::new("Bob").unwrap());
        bob.add_phone("1111111111").unwrap();

        let carol = Record::new(Name::new("Carol").unwrap());

        [alice, bob, carol].into_iter().collect()
    }

    #[test]
    fn test_load_missing_file() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(load_book(repo.path()).unwrap().is_none());
        assert!(repo.load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&AddressBook::new()).unwrap();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, repo) = create_test_repo();
        let book = sample_book();

        repo.save(&book).unwrap();
        let loaded = load_book(repo.path()).unwrap().unwrap();

        assert_eq!(loaded, book);
        let alice = loaded.find("Alice").unwrap();
        let phones: Vec<_> = alice.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1234567890", "0000000000", "1234567890"]);
        assert_eq!(alice.birthday().unwrap().to_string(), "15.06.1990");
        assert!(loaded.find("Carol").unwrap().birthday().is_none());
    }

    #[test]
    fn test_load_rejects_invalid_phone() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        std::fs::write(
            repo.path(),
            r#"{"schema_version":1,"records":[{"name":"Alice","phones":["123"]}]}"#,
        )
        .unwrap();

        let err = load_book(repo.path()).unwrap_err();
        assert!(matches!(err, ContactsError::Storage(_)));
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        std::fs::write(repo.path(), r#"{"schema_version":99,"records":[]}"#).unwrap();

        assert!(load_book(repo.path()).is_err());
    }
}
