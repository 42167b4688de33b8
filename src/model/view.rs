// 🔭 View Parameters - what the person list shows and in which order

use crate::person::Person;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// PREDICATE
// ============================================================================

/// Selects which persons appear in the filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    #[default]
    ShowAll,

    /// Any keyword equals a whole word of the name, ignoring case
    NameContainsKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::ShowAll => true,
            PersonPredicate::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| person.name().contains_word_ignore_case(keyword)),
        }
    }
}

// ============================================================================
// COMPARATOR
// ============================================================================

/// Orders the person views. Appointments always sort by date/time regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonComparator {
    /// Order persons were added in
    #[default]
    Insertion,

    /// Alphabetical, ignoring case
    Name,

    /// Earliest appointment first, unscheduled persons last
    Appointment,
}

impl PersonComparator {
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            PersonComparator::Insertion => Ordering::Equal,
            PersonComparator::Name => a
                .name()
                .as_str()
                .to_lowercase()
                .cmp(&b.name().as_str().to_lowercase()),
            PersonComparator::Appointment => a.appointment().cmp_by_date_time(b.appointment()),
        }
    }
}

impl fmt::Display for PersonComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersonComparator::Insertion => "insertion order",
            PersonComparator::Name => "name",
            PersonComparator::Appointment => "appointment",
        };
        f.write_str(label)
    }
}

// ============================================================================
// MODEL EVENTS
// ============================================================================

/// Sent to subscribers after the derived views have been rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    PersonsChanged,
    FilterChanged,
    SortChanged,
}
