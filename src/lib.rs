// Advisor Book - Core Library
// Client book for financial advisors: contacts, plans, appointments.
// Exposes all modules for use in the CLI, the TUI, and tests

pub mod appointment;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod person;
pub mod sample;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentName, ScheduleItem, ScheduledAppointment};
pub use commands::{Command, CommandResult, CompleteTarget, EditPersonDescriptor};
pub use config::Config;
pub use error::{CommandError, LogicError, ModelError, ParseError, ValidationError};
pub use index::Index;
pub use logic::LogicManager;
pub use model::{
    AddressBook, GatherEmailPrompt, ModelEvent, ModelManager, PersonComparator, PersonPredicate,
    UserPrefs,
};
pub use parser::AddressBookParser;
pub use person::Person;
pub use storage::{
    storage_for, AddressBookStorage, JsonAddressBookStorage, SqliteAddressBookStorage,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
