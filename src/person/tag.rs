// 🏷️ Tag - short alphanumeric label

use super::field::FieldValue;
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl FieldValue for Tag {
    const FIELD: &'static str = "Tag";
    const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl Tag {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Tag(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
