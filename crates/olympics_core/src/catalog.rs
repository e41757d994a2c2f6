//! Catalog: the owner of the single database connection.
//!
//! # Responsibility
//! - Open and bootstrap the database once, then hand out repositories that
//!   borrow the connection.
//!
//! # Invariants
//! - One catalog owns one connection; repositories never outlive it.
//! - The catalog is not shared across threads. Concurrent edits of the same
//!   row are last-write-wins.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::repo::athlete_repo::SqliteAthleteRepository;
use crate::repo::browse::{browse_table, TableKind, TableView};
use crate::repo::event_repo::SqliteEventRepository;
use crate::repo::integrity::ReferenceGuard;
use crate::repo::olympiad_repo::SqliteOlympiadRepository;
use crate::repo::participation_repo::SqliteParticipationRepository;
use crate::repo::sport_repo::SqliteSportRepository;
use crate::repo::team_repo::SqliteTeamRepository;
use crate::repo::{RepoError, RepoResult};
use rusqlite::Connection;
use std::path::Path;

pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Opens (or creates) the catalog file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps a connection that was already bootstrapped by `open_db*`.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn sports(&self) -> SqliteSportRepository<'_> {
        SqliteSportRepository::new(&self.conn)
    }

    pub fn athletes(&self) -> SqliteAthleteRepository<'_> {
        SqliteAthleteRepository::new(&self.conn)
    }

    pub fn teams(&self) -> SqliteTeamRepository<'_> {
        SqliteTeamRepository::new(&self.conn)
    }

    pub fn olympiads(&self) -> SqliteOlympiadRepository<'_> {
        SqliteOlympiadRepository::new(&self.conn)
    }

    pub fn events(&self) -> SqliteEventRepository<'_> {
        SqliteEventRepository::new(&self.conn)
    }

    pub fn participations(&self) -> SqliteParticipationRepository<'_> {
        SqliteParticipationRepository::new(&self.conn)
    }

    pub fn references(&self) -> ReferenceGuard<'_> {
        ReferenceGuard::new(&self.conn)
    }

    /// Renders `kind` as text rows, optionally filtered by `filter`.
    pub fn browse(&self, kind: TableKind, filter: Option<&str>) -> RepoResult<TableView> {
        browse_table(&self.conn, kind, filter)
    }

    /// Row count of `kind`.
    pub fn count(&self, kind: TableKind) -> RepoResult<u64> {
        let sql = match kind {
            TableKind::Sport => "SELECT COUNT(*) FROM sport;",
            TableKind::Athlete => "SELECT COUNT(*) FROM athlete;",
            TableKind::Team => "SELECT COUNT(*) FROM team;",
            TableKind::Olympiad => "SELECT COUNT(*) FROM olympiad;",
            TableKind::Event => "SELECT COUNT(*) FROM event;",
            TableKind::Participation => "SELECT COUNT(*) FROM participation;",
        };
        let count = self.conn.query_row(sql, [], |row| row.get::<_, i64>(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count} for {kind}")))
    }
}
