// 🗂️ JSON Storage - address book as a pretty-printed JSON file
//
// Persons go through serde DTOs with plain strings; every value is validated
// again on the way back in, so a hand-edited file cannot smuggle in a Person
// the parser would have refused.

use super::{AddressBookStorage, DataError};
use crate::appointment::{self, Appointment, AppointmentName, ScheduleItem};
use crate::model::AddressBook;
use crate::person::{
    Address, Email, FieldValue, FinancialPlan, Name, NextOfKinName, NextOfKinPhone, Person, Phone,
    Remark, Tag,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedAppointment {
    pub name: String,
    pub date_time: String,
}

/// Storage shape of a Person. Required fields are optional here so a
/// missing key can be reported by name instead of as a serde error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_of_kin_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_of_kin_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<JsonAdaptedAppointment>,

    #[serde(default)]
    pub financial_plans: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JsonAdaptedPerson {
    pub fn from_model(person: &Person) -> Self {
        JsonAdaptedPerson {
            name: Some(person.name().as_str().to_string()),
            phone: Some(person.phone().as_str().to_string()),
            email: Some(person.email().as_str().to_string()),
            address: Some(person.address().as_str().to_string()),
            next_of_kin_name: person.next_of_kin_name().map(|n| n.as_str().to_string()),
            next_of_kin_phone: person.next_of_kin_phone().map(|p| p.as_str().to_string()),
            remark: person.remark().map(|r| r.as_str().to_string()),
            appointment: person.appointment().appointment().map(|a| JsonAdaptedAppointment {
                name: a.name().as_str().to_string(),
                date_time: appointment::format_date_time(&a.date_time()),
            }),
            financial_plans: person
                .financial_plans()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            tags: person.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    /// Validate every field and build the Person
    pub fn to_model(&self) -> Result<Person, DataError> {
        let name = Name::new(required::<Name>(&self.name)?)?;
        let phone = Phone::new(required::<Phone>(&self.phone)?)?;
        let email = Email::new(required::<Email>(&self.email)?)?;
        let address = Address::new(required::<Address>(&self.address)?)?;

        let next_of_kin_name = self
            .next_of_kin_name
            .as_deref()
            .map(NextOfKinName::new)
            .transpose()?;
        let next_of_kin_phone = self
            .next_of_kin_phone
            .as_deref()
            .map(NextOfKinPhone::new)
            .transpose()?;
        let remark = self.remark.as_deref().map(Remark::new).transpose()?;

        let appointment = match &self.appointment {
            Some(dto) => ScheduleItem::Scheduled(Appointment::new(
                AppointmentName::new(&dto.name)?,
                appointment::parse_date_time(&dto.date_time)?,
            )),
            None => ScheduleItem::Unscheduled,
        };

        let financial_plans = self
            .financial_plans
            .iter()
            .map(|p| FinancialPlan::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Person::new(name, phone, email, address)
            .with_next_of_kin_name(next_of_kin_name)
            .with_next_of_kin_phone(next_of_kin_phone)
            .with_remark(remark)
            .with_appointment(appointment)
            .with_financial_plans(financial_plans)
            .with_tags(tags))
    }
}

fn required<T: FieldValue>(value: &Option<String>) -> Result<&str, DataError> {
    value.as_deref().ok_or(DataError::MissingField(T::FIELD))
}

/// Top-level JSON document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl JsonSerializableAddressBook {
    pub fn from_model(book: &AddressBook) -> Self {
        JsonSerializableAddressBook {
            persons: book.persons().iter().map(JsonAdaptedPerson::from_model).collect(),
        }
    }

    pub fn to_model(&self) -> Result<AddressBook, DataError> {
        let persons = self
            .persons
            .iter()
            .map(JsonAdaptedPerson::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        AddressBook::from_persons(persons).map_err(|_| DataError::DuplicatePerson)
    }
}

// ============================================================================
// STORAGE
// ============================================================================

#[derive(Debug, Clone)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonAddressBookStorage { path: path.into() }
    }
}

impl AddressBookStorage for JsonAddressBookStorage {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<AddressBook>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Address book file not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let document: JsonSerializableAddressBook = serde_json::from_str(&content)
            .with_context(|| format!("Malformed address book JSON in {}", self.path.display()))?;
        let book = document
            .to_model()
            .with_context(|| format!("Illegal values in {}", self.path.display()))?;

        debug!(path = %self.path.display(), persons = book.len(), "Loaded address book");
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&JsonSerializableAddressBook::from_model(book))?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!(path = %self.path.display(), persons = book.len(), "Saved address book");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn valid_dto() -> JsonAdaptedPerson {
        JsonAdaptedPerson::from_model(&benson())
    }

    fn data_error(err: &anyhow::Error) -> &DataError {
        err.downcast_ref::<DataError>().expect("DataError in chain")
    }

    #[test]
    fn test_person_dto_round_trip() {
        assert_eq!(valid_dto().to_model(), Ok(benson()));
    }

    #[test]
    fn test_missing_required_field() {
        let dto = JsonAdaptedPerson { name: None, ..valid_dto() };
        let err = dto.to_model().unwrap_err();
        assert_eq!(err.to_string(), "Person's Name field is missing!");

        let dto = JsonAdaptedPerson { email: None, ..valid_dto() };
        assert_eq!(dto.to_model().unwrap_err().to_string(), "Person's Email field is missing!");
    }

    #[test]
    fn test_invalid_field_reports_constraint() {
        let dto = JsonAdaptedPerson {
            phone: Some("+651234".into()),
            ..valid_dto()
        };
        assert_eq!(dto.to_model().unwrap_err().to_string(), Phone::MESSAGE_CONSTRAINTS);

        let dto = JsonAdaptedPerson {
            tags: vec!["#friend".into()],
            ..valid_dto()
        };
        assert_eq!(dto.to_model().unwrap_err().to_string(), Tag::MESSAGE_CONSTRAINTS);

        let dto = JsonAdaptedPerson {
            appointment: Some(JsonAdaptedAppointment {
                name: "Review".into(),
                date_time: "2030/01/01".into(),
            }),
            ..valid_dto()
        };
        assert_eq!(
            dto.to_model().unwrap_err().to_string(),
            appointment::MESSAGE_DATE_TIME_CONSTRAINTS
        );
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("missing.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_save_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("nested").join("book.json"));

        let mut book = typical_address_book();
        storage.save(&book).unwrap();
        assert_eq!(storage.read().unwrap(), Some(book.clone()));

        // overwrite
        book.add_person(amy()).unwrap();
        book.remove_person(&alice()).unwrap();
        storage.save(&book).unwrap();
        assert_eq!(storage.read().unwrap(), Some(book));
    }

    #[test]
    fn test_duplicate_persons_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dup.json");
        let document = JsonSerializableAddressBook {
            persons: vec![valid_dto(), valid_dto()],
        };
        fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let err = JsonAddressBookStorage::new(&path).read().unwrap_err();
        assert_eq!(data_error(&err), &DataError::DuplicatePerson);
        assert_eq!(
            data_error(&err).to_string(),
            "Persons list contains duplicate person(s)."
        );
    }

    #[test]
    fn test_invalid_person_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(
            &path,
            r#"{ "persons": [ { "name": "Hans Muster", "phone": "9482424", "address": "4th street" } ] }"#,
        )
        .unwrap();

        let err = JsonAddressBookStorage::new(&path).read().unwrap_err();
        assert_eq!(data_error(&err), &DataError::MissingField("Email"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(JsonAddressBookStorage::new(&path).read().is_err());
    }
}
