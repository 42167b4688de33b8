// 👤 Name - the identity-bearing field of a Person

use super::field::{FieldValue, ALNUM_WITH_SPACES};
use crate::error::ValidationError;
use std::fmt;

/// A client's full name.
///
/// Two persons with names equal ignoring case are the same person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl FieldValue for Name {
    const FIELD: &'static str = "Name";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        ALNUM_WITH_SPACES.is_match(raw)
    }
}

impl Name {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Name(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for duplicate detection
    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// True if any whitespace-separated word of the name equals `word`, ignoring case
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.0
            .split_whitespace()
            .any(|part| part.to_lowercase() == word)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
