// 🧑‍🤝‍🧑 Next-of-Kin Fields - emergency contact for a client

use super::field::{FieldValue, ALNUM_WITH_SPACES, PHONE_DIGITS};
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NextOfKinName(String);

impl FieldValue for NextOfKinName {
    const FIELD: &'static str = "NextOfKinName";
    const MESSAGE_CONSTRAINTS: &'static str = "Next-of-kin names should only contain alphanumeric \
characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        ALNUM_WITH_SPACES.is_match(raw)
    }
}

impl NextOfKinName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(NextOfKinName(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NextOfKinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NextOfKinPhone(String);

impl FieldValue for NextOfKinPhone {
    const FIELD: &'static str = "NextOfKinPhone";
    const MESSAGE_CONSTRAINTS: &'static str = "Next-of-kin phone numbers should only contain \
numbers, and it should be at least 3 digits long";

    fn is_valid(raw: &str) -> bool {
        PHONE_DIGITS.is_match(raw)
    }
}

impl NextOfKinPhone {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(NextOfKinPhone(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NextOfKinPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
