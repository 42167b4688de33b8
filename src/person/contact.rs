// 📞 Contact Fields - phone, email, address

use super::field::{FieldValue, PHONE_DIGITS};
use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// ============================================================================
// PHONE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl FieldValue for Phone {
    const FIELD: &'static str = "Phone";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    fn is_valid(raw: &str) -> bool {
        PHONE_DIGITS.is_match(raw)
    }
}

impl Phone {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Phone(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// EMAIL
// ============================================================================

// local-part: alphanumeric runs joined by single special characters
// domain: labels of alphanumeric runs joined by hyphens, last label >= 2 chars
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*",
        r"@",
        r"([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*([A-Za-z0-9]+(-[A-Za-z0-9]+)*){2,}$",
    ))
    .expect("static regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl FieldValue for Email {
    const FIELD: &'static str = "Email";
    const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    fn is_valid(raw: &str) -> bool {
        EMAIL_PATTERN.is_match(raw)
    }
}

impl Email {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Email(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl FieldValue for Address {
    const FIELD: &'static str = "Address";
    const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

impl Address {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(Address(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(!Phone::is_valid(""));
        assert!(!Phone::is_valid(" "));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("phone"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));

        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(Phone::is_valid("124293842033123"));
    }

    #[test]
    fn test_phone_construction() {
        assert_eq!(Phone::new("93121534").unwrap().as_str(), "93121534");
        assert_eq!(Phone::new("12").unwrap_err().message, Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_email_missing_parts() {
        assert!(!Email::is_valid(""));
        assert!(!Email::is_valid(" "));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjackexample.com"));
        assert!(!Email::is_valid("peterjack@"));
    }

    #[test]
    fn test_email_invalid_parts() {
        assert!(!Email::is_valid("peterjack@-"));
        assert!(!Email::is_valid("peterjack@exam_ple.com"));
        assert!(!Email::is_valid("peter jack@example.com"));
        assert!(!Email::is_valid("peterjack@exam ple.com"));
        assert!(!Email::is_valid(" peterjack@example.com"));
        assert!(!Email::is_valid("peterjack@example.com "));
        assert!(!Email::is_valid("peterjack@@example.com"));
        assert!(!Email::is_valid("peter@jack@example.com"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peterjack-@example.com"));
        assert!(!Email::is_valid("peter..jack@example.com"));
        assert!(!Email::is_valid("peterjack@example@com"));
        assert!(!Email::is_valid("peterjack@.example.com"));
        assert!(!Email::is_valid("peterjack@example.com."));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peterjack@example.com-"));
        assert!(!Email::is_valid("peterjack@example.c"));
    }

    #[test]
    fn test_email_valid() {
        assert!(Email::is_valid("PeterJack_1190@example.com"));
        assert!(Email::is_valid("PeterJack.1190@example.com"));
        assert!(Email::is_valid("PeterJack+1190@example.com"));
        assert!(Email::is_valid("PeterJack-1190@example.com"));
        assert!(Email::is_valid("a@bc"));
        assert!(Email::is_valid("test@localhost"));
        assert!(Email::is_valid("123@145"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peter_jack@very-very-very-long-example.com"));
        assert!(Email::is_valid("if.you.dream.it_you.can.do.it@example.com"));
        assert!(Email::is_valid("e1234567@u.nus.edu"));
    }

    #[test]
    fn test_address_validation() {
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" "));
        assert!(!Address::is_valid("\tBlk 456"));

        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(Address::is_valid("Leng Inc; 1234 Market St; San Francisco CA 2349879; USA"));
    }
}
