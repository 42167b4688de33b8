// ⚡ Commands - every user action as one exhaustive enum
//
// Parsing builds a Command; executing it mutates the ModelManager and
// returns the feedback line shown to the user. Execution checks everything
// it can before touching the model, so a failed command changes nothing.

pub mod edit;

pub use edit::{CollectionEdit, EditPersonDescriptor};

use crate::appointment::{format_date, Appointment, ScheduleItem};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::{AddressBook, GatherEmailPrompt, ModelManager, PersonComparator, PersonPredicate};
use crate::person::{Person, Remark};
use chrono::NaiveDate;
use tracing::info;

// ============================================================================
// COMMAND WORDS & USAGE
// ============================================================================

pub const ADD_WORD: &str = "add";
pub const EDIT_WORD: &str = "edit";
pub const DELETE_WORD: &str = "delete";
pub const FIND_WORD: &str = "find";
pub const LIST_WORD: &str = "list";
pub const CLEAR_WORD: &str = "clear";
pub const REMARK_WORD: &str = "remark";
pub const SORT_WORD: &str = "sort";
pub const SCHEDULE_WORD: &str = "schedule";
pub const COMPLETE_WORD: &str = "complete";
pub const GATHER_WORD: &str = "gather";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const ADD_USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [nkn/NEXT_OF_KIN_NAME] [nkp/NEXT_OF_KIN_PHONE] \
[r/REMARK] [fp/FINANCIAL_PLAN]... [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
nkn/Jane Doe nkp/91234567 fp/Retirement Plan t/friends";

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[nkn/NEXT_OF_KIN_NAME] [nkp/NEXT_OF_KIN_PHONE] [fp/FINANCIAL_PLAN]... [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number \
used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const REMARK_USAGE: &str = "remark: Edits the remark of the person identified by the index \
number used in the displayed person list. Existing remark will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
Example: remark 1 r/Likes to swim.";

pub const SORT_USAGE: &str = "sort: Sorts the displayed person list.\n\
Parameters: name | appointment\n\
Example: sort appointment";

pub const SCHEDULE_USAGE: &str = "schedule: Schedules an appointment with the person identified \
by the index number used in the displayed person list. An existing appointment is replaced.\n\
Parameters: INDEX (must be a positive integer) ap/APPOINTMENT_NAME d/DD-MM-YYYY HH:MM\n\
Example: schedule 1 ap/Annual review d/01-01-2030 10:00";

pub const COMPLETE_USAGE: &str = "complete: Completes the appointment of the person identified \
by the index number used in the displayed person list, or every appointment on a date.\n\
Parameters: INDEX (must be a positive integer) or d/DD-MM-YYYY\n\
Example: complete 1\n\
Example: complete d/01-01-2030";

pub const GATHER_USAGE: &str = "gather: Gathers the emails of every person with a financial \
plan or tag containing the given text (case-insensitive).\n\
Parameters: fp/FINANCIAL_PLAN or t/TAG\n\
Example: gather fp/Retirement";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const HELP_MESSAGE: &str = "Commands:\n\
  add n/NAME p/PHONE e/EMAIL a/ADDRESS [nkn/NOK_NAME] [nkp/NOK_PHONE] [r/REMARK] [fp/PLAN]... [t/TAG]...\n\
  edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [nkn/NOK_NAME] [nkp/NOK_PHONE] [fp/PLAN]... [t/TAG]...\n\
  delete INDEX\n\
  find KEYWORD [MORE_KEYWORDS]...\n\
  list\n\
  clear\n\
  remark INDEX r/[REMARK]\n\
  sort name|appointment\n\
  schedule INDEX ap/APPOINTMENT_NAME d/DD-MM-YYYY HH:MM\n\
  complete INDEX | complete d/DD-MM-YYYY\n\
  gather fp/PLAN | gather t/TAG\n\
  help\n\
  exit";

pub const MESSAGE_EXIT: &str = "Exiting Advisor Book as requested ...";

// ============================================================================
// COMMAND RESULT
// ============================================================================

/// What the UI shows after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback_to_user: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    fn help() -> Self {
        CommandResult {
            show_help: true,
            ..CommandResult::new(HELP_MESSAGE)
        }
    }

    fn exit() -> Self {
        CommandResult {
            exit: true,
            ..CommandResult::new(MESSAGE_EXIT)
        }
    }
}

// ============================================================================
// COMMAND
// ============================================================================

/// Which appointments a `complete` finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteTarget {
    ByIndex(Index),
    ByDate(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Edit {
        index: Index,
        descriptor: EditPersonDescriptor,
    },
    Delete(Index),
    Find(PersonPredicate),
    List,
    Clear,
    Remark {
        index: Index,
        remark: Option<Remark>,
    },
    Sort(PersonComparator),
    Schedule {
        index: Index,
        appointment: Appointment,
    },
    Complete(CompleteTarget),
    Gather(GatherEmailPrompt),
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => ADD_WORD,
            Command::Edit { .. } => EDIT_WORD,
            Command::Delete(_) => DELETE_WORD,
            Command::Find(_) => FIND_WORD,
            Command::List => LIST_WORD,
            Command::Clear => CLEAR_WORD,
            Command::Remark { .. } => REMARK_WORD,
            Command::Sort(_) => SORT_WORD,
            Command::Schedule { .. } => SCHEDULE_WORD,
            Command::Complete(_) => COMPLETE_WORD,
            Command::Gather(_) => GATHER_WORD,
            Command::Help => HELP_WORD,
            Command::Exit => EXIT_WORD,
        }
    }

    /// True for commands that can change the address book
    pub fn mutates_book(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit { .. }
                | Command::Delete(_)
                | Command::Clear
                | Command::Remark { .. }
                | Command::Schedule { .. }
                | Command::Complete(_)
        )
    }

    pub fn execute(self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let word = self.word();
        let result = match self {
            Command::Add(person) => add(model, person),
            Command::Edit { index, descriptor } => edit(model, index, &descriptor),
            Command::Delete(index) => delete(model, index),
            Command::Find(predicate) => {
                model.update_filtered_person_list(predicate);
                Ok(CommandResult::new(format!(
                    "{} persons listed!",
                    model.filtered_person_list().len()
                )))
            }
            Command::List => {
                model.update_filtered_person_list(PersonPredicate::ShowAll);
                Ok(CommandResult::new("Listed all persons"))
            }
            Command::Clear => {
                model.set_address_book(&AddressBook::new());
                Ok(CommandResult::new("Address book has been cleared!"))
            }
            Command::Remark { index, remark } => set_remark(model, index, remark),
            Command::Sort(comparator) => {
                model.sort_filtered_person_list(comparator);
                Ok(CommandResult::new(format!("Sorted all persons by {}", comparator)))
            }
            Command::Schedule { index, appointment } => schedule(model, index, appointment),
            Command::Complete(target) => complete(model, target),
            Command::Gather(prompt) => {
                let emails = model.gather_emails(&prompt);
                if emails.is_empty() {
                    Ok(CommandResult::new(format!("No emails found for {}", prompt)))
                } else {
                    Ok(CommandResult::new(format!("Emails gathered: {}", emails)))
                }
            }
            Command::Help => Ok(CommandResult::help()),
            Command::Exit => Ok(CommandResult::exit()),
        }?;

        info!(command = word, "Command executed");
        Ok(result)
    }
}

// ============================================================================
// PERSON COMMANDS
// ============================================================================

fn person_at(model: &ModelManager, index: Index) -> Result<Person, CommandError> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidPersonIndex)
}

/// Replace `target` and show every person again
fn replace_person(
    model: &mut ModelManager,
    target: &Person,
    edited: Person,
) -> Result<(), CommandError> {
    model.set_person(target, edited)?;
    model.update_filtered_person_list(PersonPredicate::ShowAll);
    Ok(())
}

fn add(model: &mut ModelManager, person: Person) -> Result<CommandResult, CommandError> {
    if model.has_person(&person) {
        return Err(CommandError::DuplicatePerson);
    }
    let feedback = format!("New person added: {}", person);
    model.add_person(person)?;
    Ok(CommandResult::new(feedback))
}

fn edit(
    model: &mut ModelManager,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = person_at(model, index)?;
    let edited = descriptor.apply(&target);

    if !target.is_same_person(&edited) && model.has_person(&edited) {
        return Err(CommandError::DuplicatePerson);
    }

    let feedback = format!("Edited Person: {}", edited);
    replace_person(model, &target, edited)?;
    Ok(CommandResult::new(feedback))
}

fn delete(model: &mut ModelManager, index: Index) -> Result<CommandResult, CommandError> {
    let target = person_at(model, index)?;
    model.delete_person(&target)?;
    Ok(CommandResult::new(format!("Deleted Person: {}", target)))
}

fn set_remark(
    model: &mut ModelManager,
    index: Index,
    remark: Option<Remark>,
) -> Result<CommandResult, CommandError> {
    let target = person_at(model, index)?;
    let edited = target.clone().with_remark(remark);

    let feedback = if edited.remark().is_some() {
        format!("Added remark to Person: {}", edited)
    } else {
        format!("Removed remark from Person: {}", edited)
    };

    replace_person(model, &target, edited)?;
    Ok(CommandResult::new(feedback))
}

// ============================================================================
// APPOINTMENT COMMANDS
// ============================================================================

fn schedule(
    model: &mut ModelManager,
    index: Index,
    appointment: Appointment,
) -> Result<CommandResult, CommandError> {
    let target = person_at(model, index)?;
    let feedback = format!("New appointment added: {} for {}", appointment, target.name());
    let edited = target
        .clone()
        .with_appointment(ScheduleItem::Scheduled(appointment));

    replace_person(model, &target, edited)?;
    Ok(CommandResult::new(feedback))
}

fn complete(model: &mut ModelManager, target: CompleteTarget) -> Result<CommandResult, CommandError> {
    match target {
        CompleteTarget::ByIndex(index) => {
            let person = person_at(model, index)?;
            if !person.appointment().is_scheduled() {
                return Err(CommandError::NoAppointment(person.name().to_string()));
            }

            let feedback = format!("Completed appointment of {}", person.name());
            let edited = person.clone().with_appointment(ScheduleItem::Unscheduled);
            replace_person(model, &person, edited)?;
            Ok(CommandResult::new(feedback))
        }
        CompleteTarget::ByDate(date) => {
            let formatted = format_date(&date);
            if !model.has_appointment_with_date(date) {
                return Err(CommandError::NoAppointmentsOnDate(formatted));
            }

            model.clear_appointments(date);
            Ok(CommandResult::new(format!(
                "Completed all appointments on {}",
                formatted
            )))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
