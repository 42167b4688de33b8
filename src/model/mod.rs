// 🧠 Model Manager - authoritative address book plus derived views
//
// Derived views are plain snapshots rebuilt synchronously after every change:
//
//   address book ──sort(comparator)──▶ sorted ──filter(predicate)──▶ filtered
//                                                                     │
//                       appointments (by date/time) ◀──join person────┘
//
// Nothing is recomputed lazily. Subscribers are told which kind of change
// happened once the views are consistent again.

pub mod address_book;
pub mod gather;
pub mod user_prefs;
pub mod view;

pub use address_book::AddressBook;
pub use gather::GatherEmailPrompt;
pub use user_prefs::UserPrefs;
pub use view::{ModelEvent, PersonComparator, PersonPredicate};

use crate::appointment::ScheduledAppointment;
use crate::error::ModelError;
use crate::person::Person;
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Callback invoked after the model's views change
pub type Listener = Box<dyn FnMut(&ModelEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// ============================================================================
// MODEL MANAGER
// ============================================================================

pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,

    // view parameters
    predicate: PersonPredicate,
    comparator: PersonComparator,

    // derived snapshots
    sorted_persons: Vec<Person>,
    filtered_persons: Vec<Person>,
    appointments: Vec<ScheduledAppointment>,

    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ModelManager {
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        debug!(
            persons = address_book.len(),
            prefs = ?user_prefs,
            "Initializing model"
        );

        let mut model = ModelManager {
            address_book,
            user_prefs,
            predicate: PersonPredicate::ShowAll,
            comparator: PersonComparator::Insertion,
            sorted_persons: Vec::new(),
            filtered_persons: Vec::new(),
            appointments: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        };
        model.rebuild_sorted();
        model
    }

    // ========================================================================
    // USER PREFS
    // ========================================================================

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.user_prefs.set_address_book_file_path(path);
    }

    // ========================================================================
    // ADDRESS BOOK MUTATIONS
    // ========================================================================

    pub fn set_address_book(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
        self.rebuild_sorted();
        self.notify(ModelEvent::PersonsChanged);
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<(), ModelError> {
        self.address_book.remove_person(target)?;
        self.rebuild_sorted();
        self.notify(ModelEvent::PersonsChanged);
        Ok(())
    }

    /// Adds the person and resets the filter so the new person is visible
    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.address_book.add_person(person)?;
        self.predicate = PersonPredicate::ShowAll;
        self.rebuild_sorted();
        self.notify(ModelEvent::PersonsChanged);
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        self.address_book.set_person(target, edited)?;
        self.rebuild_sorted();
        self.notify(ModelEvent::PersonsChanged);
        Ok(())
    }

    pub fn clear_appointments(&mut self, date: NaiveDate) {
        self.address_book.clear_appointments(date);
        self.rebuild_sorted();
        self.notify(ModelEvent::PersonsChanged);
    }

    pub fn has_appointment_with_date(&self, date: NaiveDate) -> bool {
        self.address_book.has_appointment_with_date(date)
    }

    pub fn gather_emails(&self, prompt: &GatherEmailPrompt) -> String {
        self.address_book.gather_emails(prompt)
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// Persons passing the active predicate, in the active sort order
    pub fn filtered_person_list(&self) -> &[Person] {
        &self.filtered_persons
    }

    /// Every person, in the active sort order
    pub fn sorted_person_list(&self) -> &[Person] {
        &self.sorted_persons
    }

    /// Appointments of the filtered persons, earliest first
    pub fn appointment_list(&self) -> &[ScheduledAppointment] {
        &self.appointments
    }

    pub fn predicate(&self) -> &PersonPredicate {
        &self.predicate
    }

    pub fn comparator(&self) -> PersonComparator {
        self.comparator
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.predicate = predicate;
        self.rebuild_filtered();
        self.notify(ModelEvent::FilterChanged);
    }

    pub fn sort_filtered_person_list(&mut self, comparator: PersonComparator) {
        self.comparator = comparator;
        self.rebuild_sorted();
        self.notify(ModelEvent::SortChanged);
    }

    // ========================================================================
    // SUBSCRIPTIONS
    // ========================================================================

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: ModelEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    // ========================================================================
    // REBUILD
    // ========================================================================

    fn rebuild_sorted(&mut self) {
        let mut sorted = self.address_book.persons().to_vec();
        let comparator = self.comparator;
        // stable: ties keep insertion order
        sorted.sort_by(|a, b| comparator.compare(a, b));
        self.sorted_persons = sorted;
        self.rebuild_filtered();
    }

    fn rebuild_filtered(&mut self) {
        self.filtered_persons = self
            .sorted_persons
            .iter()
            .filter(|p| self.predicate.test(p))
            .cloned()
            .collect();
        self.rebuild_appointments();
    }

    fn rebuild_appointments(&mut self) {
        let mut appointments: Vec<ScheduledAppointment> = self
            .filtered_persons
            .iter()
            .filter_map(ScheduledAppointment::from_person)
            .collect();
        appointments.sort_by_key(|a| a.appointment.date_time());
        self.appointments = appointments;

        debug!(
            persons = self.address_book.len(),
            shown = self.filtered_persons.len(),
            appointments = self.appointments.len(),
            "Rebuilt model views"
        );
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        ModelManager::new(AddressBook::new(), UserPrefs::default())
    }
}

impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.address_book == other.address_book
            && self.user_prefs == other.user_prefs
            && self.filtered_persons == other.filtered_persons
    }
}

impl fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &self.address_book)
            .field("user_prefs", &self.user_prefs)
            .field("predicate", &self.predicate)
            .field("comparator", &self.comparator)
            .field("filtered_persons", &self.filtered_persons.len())
            .field("appointments", &self.appointments.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::parse_date;
    use crate::test_utils::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn typical_model() -> ModelManager {
        ModelManager::new(typical_address_book(), UserPrefs::default())
    }

    fn names(persons: &[Person]) -> Vec<&str> {
        persons.iter().map(|p| p.name().as_str()).collect()
    }

    fn appointment_owners(model: &ModelManager) -> Vec<&str> {
        model
            .appointment_list()
            .iter()
            .map(|a| a.person.name().as_str())
            .collect()
    }

    /// The appointment view must be exactly the filtered persons' appointments, by date
    fn assert_appointments_consistent(model: &ModelManager) {
        let mut expected: Vec<ScheduledAppointment> = model
            .filtered_person_list()
            .iter()
            .filter_map(ScheduledAppointment::from_person)
            .collect();
        expected.sort_by_key(|a| a.appointment.date_time());
        assert_eq!(model.appointment_list(), expected.as_slice());
        assert!(model
            .appointment_list()
            .windows(2)
            .all(|w| w[0].appointment.date_time() <= w[1].appointment.date_time()));
    }

    #[test]
    fn test_constructor_defaults() {
        let model = ModelManager::default();
        assert_eq!(model.user_prefs(), &UserPrefs::default());
        assert!(model.address_book().is_empty());
        assert!(model.filtered_person_list().is_empty());
        assert!(model.appointment_list().is_empty());
    }

    #[test]
    fn test_set_address_book_file_path() {
        let mut model = ModelManager::default();
        model.set_address_book_file_path("address/book/file/path");
        assert_eq!(model.address_book_file_path(), Path::new("address/book/file/path"));
    }

    #[test]
    fn test_appointment_list_sorted_and_joined() {
        let model = typical_model();
        // benson 01-06, daniel 12-06 08:30, alice 12-06 10:00
        assert_eq!(
            appointment_owners(&model),
            vec!["Benson Meier", "Daniel Meier", "Alice Pauline"]
        );
        assert_appointments_consistent(&model);
    }

    #[test]
    fn test_appointment_list_is_idempotent() {
        let model = typical_model();
        let first = model.appointment_list().to_vec();
        let second = model.appointment_list().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_has_person() {
        let model = typical_model();
        assert!(model.has_person(&alice()));
        assert!(!model.has_person(&amy()));
    }

    #[test]
    fn test_add_person_resets_filter() {
        let mut model = typical_model();
        model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(vec!["Kurz".into()]));
        assert_eq!(model.filtered_person_list().len(), 1);

        model.add_person(amy()).unwrap();

        assert_eq!(model.predicate(), &PersonPredicate::ShowAll);
        assert_eq!(model.filtered_person_list().len(), 8);
        assert_appointments_consistent(&model);
    }

    #[test]
    fn test_add_duplicate_fails_before_mutation() {
        let mut model = typical_model();
        let before_book = model.address_book().clone();
        let duplicate = PersonBuilder::new("ALICE pauline").build();

        assert_eq!(model.add_person(duplicate), Err(ModelError::DuplicatePerson));
        assert_eq!(model.address_book(), &before_book);
        assert_eq!(model.filtered_person_list().len(), 7);
    }

    #[test]
    fn test_delete_person_updates_appointments() {
        let mut model = typical_model();
        model.delete_person(&benson()).unwrap();
        assert_eq!(appointment_owners(&model), vec!["Daniel Meier", "Alice Pauline"]);
        assert_appointments_consistent(&model);
    }

    #[test]
    fn test_set_person_updates_appointments() {
        let mut model = typical_model();
        let rescheduled = PersonBuilder::from(&alice())
            .appointment("Annual review", "01-01-2030 09:00")
            .build();
        model.set_person(&alice(), rescheduled).unwrap();
        assert_eq!(
            appointment_owners(&model),
            vec!["Alice Pauline", "Benson Meier", "Daniel Meier"]
        );
        assert_appointments_consistent(&model);
    }

    #[test]
    fn test_clear_appointments_on_date() {
        let mut model = typical_model();
        let date = parse_date("12-06-2030").unwrap();
        assert!(model.has_appointment_with_date(date));

        model.clear_appointments(date);

        assert!(!model.has_appointment_with_date(date));
        assert_eq!(appointment_owners(&model), vec!["Benson Meier"]);
    }

    #[test]
    fn test_filter_returns_matching_subset_in_sort_order() {
        let mut model = typical_model();
        model.sort_filtered_person_list(PersonComparator::Name);
        model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(vec![
            "meier".into(),
            "best".into(),
        ]));

        let expected: Vec<Person> = model
            .sorted_person_list()
            .iter()
            .filter(|p| model.predicate().test(p))
            .cloned()
            .collect();
        assert_eq!(model.filtered_person_list(), expected.as_slice());
        assert_eq!(
            names(model.filtered_person_list()),
            vec!["Benson Meier", "Daniel Meier", "George Best"]
        );
    }

    #[test]
    fn test_filter_narrows_appointments() {
        let mut model = typical_model();
        model.update_filtered_person_list(PersonPredicate::NameContainsKeywords(vec!["Alice".into()]));
        assert_eq!(appointment_owners(&model), vec!["Alice Pauline"]);
        assert_appointments_consistent(&model);

        model.update_filtered_person_list(PersonPredicate::ShowAll);
        assert_eq!(model.appointment_list().len(), 3);
    }

    #[test]
    fn test_sort_does_not_change_appointment_order() {
        let mut model = typical_model();
        let before = model.appointment_list().to_vec();

        model.sort_filtered_person_list(PersonComparator::Name);
        assert_eq!(model.appointment_list(), before.as_slice());

        model.sort_filtered_person_list(PersonComparator::Appointment);
        assert_eq!(
            names(&model.filtered_person_list()[..3]),
            vec!["Benson Meier", "Daniel Meier", "Alice Pauline"]
        );
        assert_eq!(model.appointment_list(), before.as_slice());
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut model = typical_model();
        model.sort_filtered_person_list(PersonComparator::Appointment);
        // unscheduled persons keep insertion order at the end
        assert_eq!(
            names(&model.filtered_person_list()[3..]),
            vec!["Carl Kurz", "Elle Meyer", "Fiona Kunz", "George Best"]
        );
    }

    #[test]
    fn test_subscribers_are_notified() {
        let mut model = typical_model();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = model.subscribe(Box::new(move |event: &ModelEvent| sink.borrow_mut().push(*event)));

        model.add_person(amy()).unwrap();
        model.update_filtered_person_list(PersonPredicate::ShowAll);
        model.sort_filtered_person_list(PersonComparator::Name);

        assert_eq!(
            *events.borrow(),
            vec![ModelEvent::PersonsChanged, ModelEvent::FilterChanged, ModelEvent::SortChanged]
        );

        assert!(model.unsubscribe(id));
        assert!(!model.unsubscribe(id));
        model.delete_person(&amy()).unwrap();
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn test_equality() {
        let model = typical_model();
        assert_eq!(model, typical_model());

        // different address book
        assert_ne!(model, ModelManager::default());

        // different filtered list
        let mut filtered = typical_model();
        filtered.update_filtered_person_list(PersonPredicate::NameContainsKeywords(vec!["Alice".into()]));
        assert_ne!(model, filtered);

        // different user prefs
        let mut prefs = UserPrefs::default();
        prefs.set_address_book_file_path("different");
        assert_ne!(model, ModelManager::new(typical_address_book(), prefs));
    }
}
