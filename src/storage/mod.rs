// 💾 Storage - where the address book lives between runs
//
// One trait, two backends picked by file extension:
//   .db / .sqlite / .sqlite3 → SQLite (rows + event log)
//   anything else            → JSON document

pub mod csv_io;
pub mod json;
pub mod sqlite;

pub use json::JsonAddressBookStorage;
pub use sqlite::SqliteAddressBookStorage;

use crate::error::ValidationError;
use crate::model::AddressBook;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Stored data that cannot become a valid AddressBook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Person's {0} field is missing!")]
    MissingField(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Persons list contains duplicate person(s).")]
    DuplicatePerson,
}

pub trait AddressBookStorage {
    fn file_path(&self) -> &Path;

    /// `Ok(None)` when nothing has been saved yet
    fn read(&self) -> Result<Option<AddressBook>>;

    fn save(&self, book: &AddressBook) -> Result<()>;
}

const SQLITE_EXTENSIONS: [&str; 3] = ["db", "sqlite", "sqlite3"];

pub fn is_sqlite_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SQLITE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Pick the backend for `path` by its extension
pub fn storage_for(path: &Path) -> Box<dyn AddressBookStorage> {
    if is_sqlite_path(path) {
        Box::new(SqliteAddressBookStorage::new(path))
    } else {
        Box::new(JsonAddressBookStorage::new(path))
    }
}
