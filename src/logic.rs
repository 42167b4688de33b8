// 🔁 Logic Manager - parse, execute, persist
//
// input text → AddressBookParser → Command → ModelManager → storage.save

use crate::appointment::ScheduledAppointment;
use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::model::ModelManager;
use crate::parser::AddressBookParser;
use crate::person::Person;
use crate::storage::AddressBookStorage;
use std::path::Path;
use tracing::{info, warn};

pub struct LogicManager {
    model: ModelManager,
    storage: Box<dyn AddressBookStorage>,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: Box<dyn AddressBookStorage>) -> Self {
        LogicManager { model, storage }
    }

    /// Run one line of user input. The book is saved after any command
    /// that can change it; failures leave both model and file untouched.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(command = command_text, "User command");

        let command = AddressBookParser::parse_command(command_text).inspect_err(|e| {
            warn!(error = %e, "Rejected command");
        })?;
        let mutates = command.mutates_book();
        let result = command.execute(&mut self.model).inspect_err(|e| {
            warn!(error = %e, "Command failed");
        })?;

        if mutates {
            self.save()?;
        }

        Ok(result)
    }

    /// Write the current book through the configured storage
    pub fn save(&self) -> Result<(), LogicError> {
        self.storage
            .save(self.model.address_book())
            .map_err(|e| LogicError::Storage(format!("{:#}", e)))
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// For view subscriptions
    pub fn model_mut(&mut self) -> &mut ModelManager {
        &mut self.model
    }

    pub fn filtered_person_list(&self) -> &[Person] {
        self.model.filtered_person_list()
    }

    pub fn appointment_list(&self) -> &[ScheduledAppointment] {
        self.model.appointment_list()
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.storage.file_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{HELP_MESSAGE, MESSAGE_EXIT};
    use crate::error::{CommandError, ParseError};
    use crate::model::{AddressBook, UserPrefs};
    use crate::storage::JsonAddressBookStorage;
    use crate::test_utils::*;
    use anyhow::{anyhow, Result};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use tempfile::TempDir;

    /// Records every save instead of writing a file
    struct RecordingStorage {
        path: PathBuf,
        saves: Rc<RefCell<Vec<AddressBook>>>,
    }

    impl AddressBookStorage for RecordingStorage {
        fn file_path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> Result<Option<AddressBook>> {
            Ok(self.saves.borrow().last().cloned())
        }

        fn save(&self, book: &AddressBook) -> Result<()> {
            self.saves.borrow_mut().push(book.clone());
            Ok(())
        }
    }

    struct FailingStorage;

    impl AddressBookStorage for FailingStorage {
        fn file_path(&self) -> &Path {
            Path::new("unwritable.json")
        }

        fn read(&self) -> Result<Option<AddressBook>> {
            Ok(None)
        }

        fn save(&self, _book: &AddressBook) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    fn recording_logic() -> (LogicManager, Rc<RefCell<Vec<AddressBook>>>) {
        let saves = Rc::new(RefCell::new(Vec::new()));
        let storage = RecordingStorage {
            path: PathBuf::from("book.json"),
            saves: Rc::clone(&saves),
        };
        let model = ModelManager::new(typical_address_book(), UserPrefs::default());
        (LogicManager::new(model, Box::new(storage)), saves)
    }

    #[test]
    fn test_invalid_command_format_not_saved() {
        let (mut logic, saves) = recording_logic();
        let err = logic.execute("uicfhmowqewca").unwrap_err();
        assert!(matches!(err, LogicError::Parse(ParseError::UnknownCommand)));
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn test_command_failure_not_saved() {
        let (mut logic, saves) = recording_logic();
        let err = logic.execute("delete 9").unwrap_err();
        assert!(matches!(err, LogicError::Command(CommandError::InvalidPersonIndex)));
        assert_eq!(err.to_string(), crate::error::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn test_mutating_command_saves_book() {
        let (mut logic, saves) = recording_logic();
        let result = logic
            .execute("add n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 t/friend")
            .unwrap();

        assert_eq!(result.feedback_to_user, format!("New person added: {}", amy()));
        assert_eq!(saves.borrow().len(), 1);
        assert_eq!(&saves.borrow()[0], logic.model().address_book());
        assert!(logic.model().has_person(&amy()));
    }

    #[test]
    fn test_view_command_does_not_save() {
        let (mut logic, saves) = recording_logic();
        let result = logic.execute("list").unwrap();
        assert_eq!(result.feedback_to_user, "Listed all persons");
        logic.execute("find Meier").unwrap();
        assert_eq!(logic.filtered_person_list().len(), 2);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let model = ModelManager::new(typical_address_book(), UserPrefs::default());
        let mut logic = LogicManager::new(model, Box::new(FailingStorage));

        let err = logic.execute("delete 1").unwrap_err();
        assert_eq!(err.to_string(), "Could not save data to file: disk full");
    }

    #[test]
    fn test_help_and_exit() {
        let (mut logic, _) = recording_logic();
        let help = logic.execute("help").unwrap();
        assert!(help.show_help);
        assert_eq!(help.feedback_to_user, HELP_MESSAGE);

        let exit = logic.execute("exit").unwrap();
        assert!(exit.exit);
        assert_eq!(exit.feedback_to_user, MESSAGE_EXIT);
    }

    #[test]
    fn test_schedule_then_complete_via_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let model = ModelManager::new(typical_address_book(), UserPrefs::default());
        let mut logic = LogicManager::new(model, Box::new(JsonAddressBookStorage::new(&path)));

        logic.execute("schedule 3 ap/Kickoff d/05-05-2030 14:00").unwrap();
        assert_eq!(logic.appointment_list().len(), 4);
        assert_eq!(logic.appointment_list()[0].person, logic.filtered_person_list()[2]);

        let stored = JsonAddressBookStorage::new(&path).read().unwrap().unwrap();
        assert_eq!(&stored, logic.model().address_book());

        logic.execute("complete d/12-06-2030").unwrap();
        let stored = JsonAddressBookStorage::new(&path).read().unwrap().unwrap();
        assert_eq!(
            stored.persons().iter().filter(|p| p.appointment().is_scheduled()).count(),
            2
        );
    }
}
