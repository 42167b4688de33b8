// 📅 Appointments - what a client has scheduled with the adviser
//
// A Person holds at most one ScheduleItem. The link from an appointment back
// to its owner is never stored; it is joined in when the model rebuilds its
// appointment view (see ScheduledAppointment).

use crate::error::ValidationError;
use crate::person::field::{FieldValue, ALNUM_WITH_SPACES};
use crate::person::Person;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// FORMATS
// ============================================================================

/// `dd-MM-yyyy HH:mm`, e.g. `01-12-2024 14:30`
pub const DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// `dd-MM-yyyy`, e.g. `01-12-2024`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub const MESSAGE_DATE_TIME_CONSTRAINTS: &str =
    "Appointment date and time should be in the format dd-MM-yyyy HH:mm";

pub const MESSAGE_DATE_CONSTRAINTS: &str = "Dates should be in the format dd-MM-yyyy";

// chrono alone accepts single digits and signed years
static DATE_TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4} [0-9]{2}:[0-9]{2}$").expect("static regex"));

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("static regex"));

/// Parse an appointment timestamp in `DATE_TIME_FORMAT`
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let invalid = || ValidationError::new("AppointmentDateTime", MESSAGE_DATE_TIME_CONSTRAINTS);
    let raw = raw.trim();
    if !DATE_TIME_SHAPE.is_match(raw) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).map_err(|_| invalid())
}

/// Parse a calendar date in `DATE_FORMAT`
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::new("Date", MESSAGE_DATE_CONSTRAINTS);
    let raw = raw.trim();
    if !DATE_SHAPE.is_match(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ============================================================================
// APPOINTMENT NAME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppointmentName(String);

impl FieldValue for AppointmentName {
    const FIELD: &'static str = "AppointmentName";
    const MESSAGE_CONSTRAINTS: &'static str = "Appointment names should only contain \
alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        ALNUM_WITH_SPACES.is_match(raw)
    }
}

impl AppointmentName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::check(raw)?;
        Ok(AppointmentName(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// APPOINTMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appointment {
    name: AppointmentName,
    date_time: NaiveDateTime,
}

impl Appointment {
    pub fn new(name: AppointmentName, date_time: NaiveDateTime) -> Self {
        Appointment { name, date_time }
    }

    pub fn name(&self) -> &AppointmentName {
        &self.name
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date() == date
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, format_date_time(&self.date_time))
    }
}

// ============================================================================
// SCHEDULE ITEM
// ============================================================================

/// The schedule slot of a Person: either empty or one appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ScheduleItem {
    #[default]
    Unscheduled,
    Scheduled(Appointment),
}

impl ScheduleItem {
    pub fn appointment(&self) -> Option<&Appointment> {
        match self {
            ScheduleItem::Unscheduled => None,
            ScheduleItem::Scheduled(appointment) => Some(appointment),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduleItem::Scheduled(_))
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.appointment().is_some_and(|a| a.is_on(date))
    }

    /// Orders scheduled items by date/time; unscheduled items sort last
    pub fn cmp_by_date_time(&self, other: &ScheduleItem) -> Ordering {
        match (self.appointment(), other.appointment()) {
            (Some(a), Some(b)) => a.date_time.cmp(&b.date_time),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleItem::Unscheduled => f.write_str("No appointment"),
            ScheduleItem::Scheduled(appointment) => appointment.fmt(f),
        }
    }
}

// ============================================================================
// SCHEDULED APPOINTMENT (derived view row)
// ============================================================================

/// An appointment joined with the person that owns it.
///
/// Built by the model when the appointment view is rebuilt; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAppointment {
    pub appointment: Appointment,
    pub person: Person,
}

impl ScheduledAppointment {
    /// Join a person with its appointment, if it has one
    pub fn from_person(person: &Person) -> Option<Self> {
        person.appointment().appointment().map(|appointment| ScheduledAppointment {
            appointment: appointment.clone(),
            person: person.clone(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
