// 📝 Remark - free-form note attached to a client

use super::field::FieldValue;
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Remark(String);

impl FieldValue for Remark {
    const FIELD: &'static str = "Remark";
    const MESSAGE_CONSTRAINTS: &'static str = "Remarks can take any values, including blanks";

    fn is_valid(_raw: &str) -> bool {
        true
    }
}

impl Remark {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Remark(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
