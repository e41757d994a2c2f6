//! Event repository contract and SQLite implementation.
//!
//! # Invariants
//! - `insert` verifies `sport_id` and then `olympiad_id` through
//!   `ReferenceGuard` before the `INSERT`; a missing target leaves the table
//!   untouched.
//! - `update` does not pre-check references. The schema's foreign keys reject
//!   a dangling id with a database error.

use crate::model::event::{Event, EventId};
use crate::model::olympiad::OlympiadId;
use crate::model::sport::SportId;
use crate::repo::integrity::ReferenceGuard;
use crate::repo::named::{execute_changed, id_by_name, name_by_id, names, query_all, query_one};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait EventRepository {
    fn insert(&self, event: &Event) -> RepoResult<EventId>;
    fn update(&self, event: &Event) -> RepoResult<bool>;
    fn delete(&self, id: EventId) -> RepoResult<bool>;
    fn get_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<EventId>>;
    fn get_name_by_id(&self, id: EventId) -> RepoResult<Option<String>>;
    fn list_all(&self) -> RepoResult<Vec<Event>>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
    /// Events of one sport, ordered by id.
    fn list_for_sport(&self, sport_id: SportId) -> RepoResult<Vec<Event>>;
    /// Events held at one olympiad, ordered by id.
    fn list_for_olympiad(&self, olympiad_id: OlympiadId) -> RepoResult<Vec<Event>>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn insert(&self, event: &Event) -> RepoResult<EventId> {
        event.validate()?;
        ReferenceGuard::new(self.conn).check_event(event)?;

        self.conn.execute(
            "INSERT INTO event (id_event, name, id_olympiad, id_sport)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                event.id,
                event.name.as_str(),
                event.olympiad_id,
                event.sport_id,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "event=event_insert module=repo status=ok id={id} sport_id={} olympiad_id={}",
            event.sport_id, event.olympiad_id
        );
        Ok(id)
    }

    fn update(&self, event: &Event) -> RepoResult<bool> {
        event.validate()?;
        let Some(id) = event.id else {
            return Ok(false);
        };

        execute_changed(
            self.conn,
            "UPDATE event
             SET
                name = ?1,
                id_olympiad = ?2,
                id_sport = ?3
             WHERE id_event = ?4;",
            params![event.name.as_str(), event.olympiad_id, event.sport_id, id],
        )
    }

    fn delete(&self, id: EventId) -> RepoResult<bool> {
        execute_changed(self.conn, "DELETE FROM event WHERE id_event = ?1;", [id])
    }

    fn get_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        query_one(
            self.conn,
            "SELECT id_event, name, id_olympiad, id_sport FROM event WHERE id_event = ?1;",
            [id],
            parse_event_row,
        )
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<EventId>> {
        id_by_name(
            self.conn,
            "SELECT id_event FROM event WHERE name = ?1 ORDER BY id_event ASC LIMIT 1;",
            name,
        )
    }

    fn get_name_by_id(&self, id: EventId) -> RepoResult<Option<String>> {
        name_by_id(self.conn, "SELECT name FROM event WHERE id_event = ?1;", id)
    }

    fn list_all(&self) -> RepoResult<Vec<Event>> {
        query_all(
            self.conn,
            "SELECT id_event, name, id_olympiad, id_sport FROM event ORDER BY id_event ASC;",
            [],
            parse_event_row,
        )
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        names(self.conn, "SELECT name FROM event ORDER BY id_event ASC;")
    }

    fn list_for_sport(&self, sport_id: SportId) -> RepoResult<Vec<Event>> {
        query_all(
            self.conn,
            "SELECT id_event, name, id_olympiad, id_sport
             FROM event
             WHERE id_sport = ?1
             ORDER BY id_event ASC;",
            [sport_id],
            parse_event_row,
        )
    }

    fn list_for_olympiad(&self, olympiad_id: OlympiadId) -> RepoResult<Vec<Event>> {
        query_all(
            self.conn,
            "SELECT id_event, name, id_olympiad, id_sport
             FROM event
             WHERE id_olympiad = ?1
             ORDER BY id_event ASC;",
            [olympiad_id],
            parse_event_row,
        )
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    Ok(Event {
        id: Some(row.get("id_event")?),
        name: row.get("name")?,
        olympiad_id: row.get("id_olympiad")?,
        sport_id: row.get("id_sport")?,
    })
}
