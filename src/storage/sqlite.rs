// 🗄️ SQLite Storage - address book rows plus an append-only event log
//
// Every save rewrites the `persons` table inside one transaction and records
// an `address_book_saved` event, so the audit trail shows when the book
// changed even though rows themselves are replaced.

use super::json::{JsonAdaptedAppointment, JsonAdaptedPerson};
use super::{AddressBookStorage, DataError};
use crate::model::AddressBook;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const EVENT_ADDRESS_BOOK_SAVED: &str = "address_book_saved";

// ============================================================================
// SCHEMA
// ============================================================================

pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS persons (
            position INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            next_of_kin_name TEXT,
            next_of_kin_phone TEXT,
            remark TEXT,
            appointment_name TEXT,
            appointment_date_time TEXT,
            financial_plans TEXT NOT NULL DEFAULT '[]',
            tags TEXT NOT NULL DEFAULT '[]'
        )",
        [],
    )?;

    // ==========================================================================
    // Events Table (audit trail)
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id TEXT UNIQUE NOT NULL,
            timestamp TEXT NOT NULL,
            event_type TEXT NOT NULL,
            data TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp)",
        [],
    )?;

    Ok(())
}

// ============================================================================
// EVENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub data: serde_json::Value,
}

impl Event {
    pub fn new(event_type: &str, data: serde_json::Value) -> Self {
        Event {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            data,
        }
    }
}

pub fn insert_event(conn: &Connection, event: &Event) -> Result<()> {
    let data_json = serde_json::to_string(&event.data)?;

    conn.execute(
        "INSERT INTO events (event_id, timestamp, event_type, data) VALUES (?1, ?2, ?3, ?4)",
        params![
            event.event_id,
            event.timestamp.to_rfc3339(),
            event.event_type,
            data_json,
        ],
    )?;

    Ok(())
}

/// Every recorded event, newest first
pub fn get_events(conn: &Connection) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT event_id, timestamp, event_type, data
         FROM events
         ORDER BY timestamp DESC, id DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(event_id, timestamp, event_type, data)| -> Result<Event> {
            Ok(Event {
                event_id,
                timestamp: DateTime::parse_from_rfc3339(&timestamp)
                    .context("Invalid event timestamp")?
                    .with_timezone(&Utc),
                event_type,
                data: serde_json::from_str(&data).context("Invalid event data")?,
            })
        })
        .collect()
}

// ============================================================================
// PERSON ROWS
// ============================================================================

fn insert_person(conn: &Connection, position: usize, person: &JsonAdaptedPerson) -> Result<()> {
    conn.execute(
        "INSERT INTO persons (
            position, name, phone, email, address,
            next_of_kin_name, next_of_kin_phone, remark,
            appointment_name, appointment_date_time,
            financial_plans, tags
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            position as i64,
            person.name,
            person.phone,
            person.email,
            person.address,
            person.next_of_kin_name,
            person.next_of_kin_phone,
            person.remark,
            person.appointment.as_ref().map(|a| a.name.as_str()),
            person.appointment.as_ref().map(|a| a.date_time.as_str()),
            serde_json::to_string(&person.financial_plans)?,
            serde_json::to_string(&person.tags)?,
        ],
    )?;
    Ok(())
}

fn get_all_persons(conn: &Connection) -> Result<Vec<JsonAdaptedPerson>> {
    let mut stmt = conn.prepare(
        "SELECT name, phone, email, address,
                next_of_kin_name, next_of_kin_phone, remark,
                appointment_name, appointment_date_time,
                financial_plans, tags
         FROM persons
         ORDER BY position",
    )?;

    let rows = stmt
        .query_map([], |row| {
            let appointment_name: Option<String> = row.get(7)?;
            let appointment_date_time: Option<String> = row.get(8)?;
            let plans_json: String = row.get(9)?;
            let tags_json: String = row.get(10)?;

            let person = JsonAdaptedPerson {
                name: row.get(0)?,
                phone: row.get(1)?,
                email: row.get(2)?,
                address: row.get(3)?,
                next_of_kin_name: row.get(4)?,
                next_of_kin_phone: row.get(5)?,
                remark: row.get(6)?,
                appointment: appointment_name.zip(appointment_date_time).map(
                    |(name, date_time)| JsonAdaptedAppointment { name, date_time },
                ),
                ..Default::default()
            };
            Ok((person, plans_json, tags_json))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(mut person, plans_json, tags_json)| -> Result<JsonAdaptedPerson> {
            person.financial_plans =
                serde_json::from_str(&plans_json).context("Invalid financial_plans column")?;
            person.tags = serde_json::from_str(&tags_json).context("Invalid tags column")?;
            Ok(person)
        })
        .collect()
}

// ============================================================================
// STORAGE
// ============================================================================

#[derive(Debug, Clone)]
pub struct SqliteAddressBookStorage {
    path: PathBuf,
}

impl SqliteAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteAddressBookStorage { path: path.into() }
    }

    fn connect(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(&self.path)
            .with_context(|| format!("Failed to open database {}", self.path.display()))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
        setup_database(&conn)?;
        Ok(conn)
    }

    /// Audit trail of saves, newest first
    pub fn events(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        get_events(&self.connect()?)
    }
}

impl AddressBookStorage for SqliteAddressBookStorage {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<AddressBook>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Database not found");
            return Ok(None);
        }

        let conn = self.connect()?;
        let persons = get_all_persons(&conn)?
            .iter()
            .map(JsonAdaptedPerson::to_model)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Illegal values in {}", self.path.display()))?;
        let book = AddressBook::from_persons(persons)
            .map_err(|_| DataError::DuplicatePerson)
            .with_context(|| format!("Illegal values in {}", self.path.display()))?;

        debug!(path = %self.path.display(), persons = book.len(), "Loaded address book");
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM persons", [])?;
        for (position, person) in book.persons().iter().enumerate() {
            insert_person(&tx, position, &JsonAdaptedPerson::from_model(person))?;
        }

        let event = Event::new(
            EVENT_ADDRESS_BOOK_SAVED,
            serde_json::json!({ "persons": book.len() }),
        );
        insert_event(&tx, &event)?;
        tx.commit()?;

        info!(path = %self.path.display(), persons = book.len(), "Saved address book");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
