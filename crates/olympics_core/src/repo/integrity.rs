//! Reference guard run before inserting rows that carry foreign keys.
//!
//! # Responsibility
//! - Turn a dangling foreign key into `RepoError::InvalidReference`, naming
//!   the table and id, instead of an opaque constraint failure.
//!
//! # Invariants
//! - Checks run in a fixed order and stop at the first missing target.
//! - Only inserts are guarded. Updates and deletes rely on the schema's
//!   foreign-key constraints.

use crate::model::event::Event;
use crate::model::participation::Participation;
use crate::repo::{RepoError, RepoResult};
use log::warn;
use rusqlite::Connection;
use std::fmt::{Display, Formatter};

/// Tables that can be the target of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTable {
    Sport,
    Olympiad,
    Athlete,
    Event,
    Team,
}

impl ReferenceTable {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Olympiad => "olympiad",
            Self::Athlete => "athlete",
            Self::Event => "event",
            Self::Team => "team",
        }
    }

    fn exists_sql(self) -> &'static str {
        match self {
            Self::Sport => "SELECT EXISTS(SELECT 1 FROM sport WHERE id_sport = ?1);",
            Self::Olympiad => "SELECT EXISTS(SELECT 1 FROM olympiad WHERE id_olympiad = ?1);",
            Self::Athlete => "SELECT EXISTS(SELECT 1 FROM athlete WHERE id_athlete = ?1);",
            Self::Event => "SELECT EXISTS(SELECT 1 FROM event WHERE id_event = ?1);",
            Self::Team => "SELECT EXISTS(SELECT 1 FROM team WHERE id_team = ?1);",
        }
    }
}

impl Display for ReferenceTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Existence checks over a borrowed catalog connection.
pub struct ReferenceGuard<'conn> {
    conn: &'conn Connection,
}

impl<'conn> ReferenceGuard<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns whether `table` holds a row with primary key `id`.
    pub fn exists(&self, table: ReferenceTable, id: i64) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row(table.exists_sql(), [id], |row| row.get::<_, i64>(0))?;
        Ok(found == 1)
    }

    /// Fails with `InvalidReference` when `table` has no row `id`.
    pub fn require(&self, table: ReferenceTable, id: i64) -> RepoResult<()> {
        if self.exists(table, id)? {
            return Ok(());
        }
        warn!("event=reference_check module=repo status=rejected table={table} id={id}");
        Err(RepoError::InvalidReference { table, id })
    }

    /// Checks every `(table, id)` pair in order; all must exist.
    pub fn require_all(&self, references: &[(ReferenceTable, i64)]) -> RepoResult<()> {
        references
            .iter()
            .try_for_each(|&(table, id)| self.require(table, id))
    }

    /// Sport first, then olympiad.
    pub fn check_event(&self, event: &Event) -> RepoResult<()> {
        self.require_all(&[
            (ReferenceTable::Sport, event.sport_id),
            (ReferenceTable::Olympiad, event.olympiad_id),
        ])
    }

    /// Athlete, event, then team.
    pub fn check_participation(&self, participation: &Participation) -> RepoResult<()> {
        self.require_all(&[
            (ReferenceTable::Athlete, participation.athlete_id),
            (ReferenceTable::Event, participation.event_id),
            (ReferenceTable::Team, participation.team_id),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::{ReferenceGuard, ReferenceTable};
    use crate::db::open_db_in_memory;
    use crate::repo::RepoError;

    #[test]
    fn exists_reports_presence_per_table() {
        let conn = open_db_in_memory().unwrap();
        conn.execute("INSERT INTO sport (name) VALUES ('Rowing');", [])
            .unwrap();
        let guard = ReferenceGuard::new(&conn);

        assert!(guard.exists(ReferenceTable::Sport, 1).unwrap());
        assert!(!guard.exists(ReferenceTable::Sport, 2).unwrap());
        assert!(!guard.exists(ReferenceTable::Team, 1).unwrap());
    }

    #[test]
    fn require_all_stops_at_first_missing_reference() {
        let conn = open_db_in_memory().unwrap();
        conn.execute("INSERT INTO team (name, initials) VALUES ('Team A', 'TMA');", [])
            .unwrap();
        let guard = ReferenceGuard::new(&conn);

        let err = guard
            .require_all(&[
                (ReferenceTable::Team, 1),
                (ReferenceTable::Athlete, 7),
                (ReferenceTable::Event, 8),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::InvalidReference {
                table: ReferenceTable::Athlete,
                id: 7
            }
        ));
    }

    #[test]
    fn invalid_reference_message_names_table_and_id() {
        let err = RepoError::InvalidReference {
            table: ReferenceTable::Sport,
            id: 99,
        };
        assert_eq!(err.to_string(), "invalid reference: no sport with id 99");
    }
}
