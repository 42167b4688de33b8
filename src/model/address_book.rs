// 📒 Address Book - ordered list of unique persons
//
// Uniqueness is by Person::is_same_person (case-insensitive name). Every
// mutation checks before it touches the list, so a failed call leaves the
// book exactly as it was.

use super::gather::GatherEmailPrompt;
use crate::appointment::ScheduleItem;
use crate::error::ModelError;
use crate::person::Person;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook::default()
    }

    /// Build a book from a list, rejecting duplicates
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, ModelError> {
        let mut book = AddressBook::new();
        book.set_persons(persons)?;
        Ok(book)
    }

    /// Replace the whole list, rejecting duplicates
    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<(), ModelError> {
        if !persons_are_unique(&persons) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons = persons;
        Ok(())
    }

    /// Replace this book's contents with a copy of `other`
    pub fn reset_data(&mut self, other: &AddressBook) {
        self.persons = other.persons.clone();
    }

    // ========================================================================
    // PERSON OPERATIONS
    // ========================================================================

    /// True if a person with the same identity is already in the book
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        if self.has_person(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        let position = self
            .position_of(target)
            .ok_or(ModelError::PersonNotFound)?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(ModelError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<(), ModelError> {
        let position = self
            .position_of(target)
            .ok_or(ModelError::PersonNotFound)?;
        self.persons.remove(position);
        Ok(())
    }

    fn position_of(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == target)
    }

    // ========================================================================
    // APPOINTMENTS
    // ========================================================================

    /// Drop every appointment that falls on `date`
    pub fn clear_appointments(&mut self, date: NaiveDate) {
        for person in self.persons.iter_mut() {
            if person.appointment().is_on(date) {
                *person = person.clone().with_appointment(ScheduleItem::Unscheduled);
            }
        }
    }

    pub fn has_appointment_with_date(&self, date: NaiveDate) -> bool {
        self.persons.iter().any(|p| p.appointment().is_on(date))
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn gather_emails(&self, prompt: &GatherEmailPrompt) -> String {
        prompt.gather(&self.persons)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

fn persons_are_unique(persons: &[Person]) -> bool {
    persons
        .iter()
        .enumerate()
        .all(|(i, a)| persons[i + 1..].iter().all(|b| !a.is_same_person(b)))
}

// ============================================================================
// TESTS
// ============================================================================
