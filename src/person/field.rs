// 🧱 Field Values - validated, immutable building blocks of a Person
//
// Every field type wraps one raw string and refuses to exist unless the
// string passes the type's predicate.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// SHARED PATTERNS
// ============================================================================

/// Alphanumeric words separated by spaces, first character not blank.
pub(crate) static ALNUM_WITH_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("static regex"));

/// At least three ASCII digits.
pub(crate) static PHONE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("static regex"));

// ============================================================================
// FIELD VALUE TRAIT
// ============================================================================

/// Common contract for validated field values.
pub trait FieldValue: Sized {
    /// Field name used in error reports and storage messages
    const FIELD: &'static str;

    /// Fixed, user-facing description of the format rule
    const MESSAGE_CONSTRAINTS: &'static str;

    /// Returns true if `raw` satisfies the field's format rule
    fn is_valid(raw: &str) -> bool;

    /// Check `raw` without constructing the value
    fn check(raw: &str) -> Result<(), ValidationError> {
        if Self::is_valid(raw) {
            Ok(())
        } else {
            Err(ValidationError::new(Self::FIELD, Self::MESSAGE_CONSTRAINTS))
        }
    }
}
