// 💰 Financial Plan - a product the client holds

use super::field::{FieldValue, ALNUM_WITH_SPACES};
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FinancialPlan(String);

impl FieldValue for FinancialPlan {
    const FIELD: &'static str = "FinancialPlan";
    const MESSAGE_CONSTRAINTS: &'static str = "Financial plan names should only contain \
alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        ALNUM_WITH_SPACES.is_match(raw)
    }
}

impl FinancialPlan {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(FinancialPlan(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match, used by email gathering
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Display for FinancialPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
