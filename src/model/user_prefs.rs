// ⚙️ User Preferences - per-user settings owned by the model

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    /// Where the address book is read from and saved to
    pub address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        UserPrefs {
            address_book_file_path: PathBuf::from("data").join("addressbook.json"),
        }
    }
}

impl UserPrefs {
    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.address_book_file_path = path.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let prefs: UserPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, UserPrefs::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let prefs: UserPrefs =
            serde_json::from_str(r#"{ "addressBookFilePath": "clients.db" }"#).unwrap();
        assert_eq!(prefs.address_book_file_path(), Path::new("clients.db"));

        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("addressBookFilePath"));
    }
}
