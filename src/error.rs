// 🚨 Error Taxonomy
// Field validation → command parsing → command execution → model guards

use crate::parser::syntax::Prefix;
use thiserror::Error;

// ============================================================================
// MESSAGES
// ============================================================================

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single field's raw value failed its format predicate.
///
/// The message is always the field's fixed `MESSAGE_CONSTRAINTS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        ValidationError { field, message }
    }
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// Structural problem in a command line. Surfaces verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },

    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex,

    #[error("{}{}", MESSAGE_DUPLICATE_FIELDS, join_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),

    #[error("{}", MESSAGE_NOT_EDITED)]
    NothingEdited,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ParseError {
    pub fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidCommandFormat { usage }
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// COMMAND ERROR
// ============================================================================

/// A well-formed command that cannot be applied to the current model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidPersonIndex,

    #[error("{}", MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    #[error("{0} has no appointment to complete")]
    NoAppointment(String),

    #[error("There are no appointments on {0}")]
    NoAppointmentsOnDate(String),
}

// ============================================================================
// MODEL ERROR
// ============================================================================

/// Invariant guards on the address book. Commands check before mutating,
/// so reaching one of these from a command is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    #[error("Person not found in the address book")]
    PersonNotFound,
}

impl From<ModelError> for CommandError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicatePerson => CommandError::DuplicatePerson,
            ModelError::PersonNotFound => CommandError::InvalidPersonIndex,
        }
    }
}

// ============================================================================
// LOGIC ERROR
// ============================================================================

/// Everything that can go wrong between raw input and a saved book.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Could not save data to file: {0}")]
    Storage(String),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_PHONE};

    #[test]
    fn test_validation_error_displays_constraint_message() {
        let err = ValidationError::new("name", "Names should not be blank");
        assert_eq!(err.to_string(), "Names should not be blank");
    }

    #[test]
    fn test_duplicate_prefixes_message_lists_all_prefixes() {
        let err = ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): n/ p/"
        );
    }

    #[test]
    fn test_invalid_format_embeds_usage() {
        let err = ParseError::invalid_format("delete: Deletes a person.");
        assert_eq!(err.to_string(), "Invalid command format! \ndelete: Deletes a person.");
    }

    #[test]
    fn test_validation_error_wraps_transparently() {
        let err: ParseError = ValidationError::new("tag", "Tags names should be alphanumeric").into();
        assert_eq!(err.to_string(), "Tags names should be alphanumeric");
    }

    #[test]
    fn test_model_error_maps_to_command_error() {
        assert_eq!(CommandError::from(ModelError::DuplicatePerson), CommandError::DuplicatePerson);
        assert_eq!(CommandError::from(ModelError::PersonNotFound), CommandError::InvalidPersonIndex);
    }
}
