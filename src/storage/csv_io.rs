// 📑 CSV Import/Export - spreadsheet interchange for client lists
//
// Multi-valued columns (financial_plans, tags) hold `;`-separated values.
// Empty optional columns mean "not set".

use super::json::JsonAdaptedPerson;
use crate::model::AddressBook;
use crate::person::Person;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const MULTI_VALUE_SEPARATOR: char = ';';

/// One CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvPerson {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub next_of_kin_name: String,
    #[serde(default)]
    pub next_of_kin_phone: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub financial_plans: String,
    #[serde(default)]
    pub tags: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn split_multi(value: &str) -> Vec<String> {
    value
        .split(MULTI_VALUE_SEPARATOR)
        .filter_map(non_empty)
        .collect()
}

fn join_multi<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(&MULTI_VALUE_SEPARATOR.to_string())
}

impl CsvPerson {
    pub fn from_model(person: &Person) -> Self {
        CsvPerson {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            next_of_kin_name: person
                .next_of_kin_name()
                .map(|n| n.to_string())
                .unwrap_or_default(),
            next_of_kin_phone: person
                .next_of_kin_phone()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            remark: person.remark().map(|r| r.to_string()).unwrap_or_default(),
            financial_plans: join_multi(person.financial_plans().iter().map(|p| p.as_str())),
            tags: join_multi(person.tags().iter().map(|t| t.as_str())),
        }
    }

    /// Validate through the same DTO the stores use
    fn to_adapted(&self) -> JsonAdaptedPerson {
        JsonAdaptedPerson {
            name: Some(self.name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            next_of_kin_name: non_empty(&self.next_of_kin_name),
            next_of_kin_phone: non_empty(&self.next_of_kin_phone),
            remark: non_empty(&self.remark),
            appointment: None,
            financial_plans: split_multi(&self.financial_plans),
            tags: split_multi(&self.tags),
        }
    }
}

/// Read persons from a CSV file. Any invalid row fails the whole import.
pub fn import_csv(path: &Path) -> Result<Vec<Person>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let mut persons = Vec::new();
    for (line, result) in rdr.deserialize::<CsvPerson>().enumerate() {
        // header is line 1
        let row_number = line + 2;
        let row = result.with_context(|| format!("Failed to read CSV row {}", row_number))?;
        let person = row
            .to_adapted()
            .to_model()
            .with_context(|| format!("Invalid person on CSV row {}", row_number))?;
        persons.push(person);
    }

    info!(path = %path.display(), persons = persons.len(), "Imported CSV");
    Ok(persons)
}

/// Write every person in the book to a CSV file
pub fn export_csv(path: &Path, book: &AddressBook) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

    for person in book.persons() {
        wtr.serialize(CsvPerson::from_model(person))?;
    }
    wtr.flush()?;

    info!(path = %path.display(), persons = book.len(), "Exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DataError;
    use crate::test_utils::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_drops_appointments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clients.csv");

        let mut book = AddressBook::new();
        book.add_person(benson()).unwrap();
        book.add_person(carl()).unwrap();
        export_csv(&path, &book).unwrap();

        let imported = import_csv(&path).unwrap();
        let expected = vec![PersonBuilder::from(&benson()).no_appointment().build(), carl()];
        assert_eq!(imported, expected);
    }

    #[test]
    fn test_export_header_and_multi_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clients.csv");

        let mut book = AddressBook::new();
        book.add_person(benson()).unwrap();
        export_csv(&path, &book).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,phone,email,address,next_of_kin_name,next_of_kin_phone,remark,financial_plans,tags"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Retirement Plan;Sample Plan 2"));
        assert!(row.contains("friends;owesMoney"));
    }

    #[test]
    fn test_import_rejects_invalid_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "name,phone,email,address,next_of_kin_name,next_of_kin_phone,remark,financial_plans,tags\n\
             Amy Bee,11111111,amy@example.com,Block 312,,,,,friend\n\
             Bob Choo,abc,bob@example.com,Block 123,,,,,\n",
        )
        .unwrap();

        let err = import_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 3"));
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::Invalid(_))
        ));
    }
}
