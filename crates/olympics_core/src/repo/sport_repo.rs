//! Sport repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD and name lookups over the `sport` table.
//!
//! # Invariants
//! - Writes call `Sport::validate()` first.
//! - `list_all` and `list_names` share the `id_sport ASC` order.
//! - `get_by_name` is an exact, case-sensitive match; duplicate names
//!   resolve to the lowest id.

use crate::model::sport::{Sport, SportId};
use crate::repo::named::{execute_changed, id_by_name, name_by_id, names, query_all, query_one};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

/// Repository interface for sports.
pub trait SportRepository {
    /// Inserts the sport and returns its row id.
    fn insert(&self, sport: &Sport) -> RepoResult<SportId>;
    /// Rewrites the row named by `sport.id`. `false` when no row matched.
    fn update(&self, sport: &Sport) -> RepoResult<bool>;
    /// `false` when no row matched.
    fn delete(&self, id: SportId) -> RepoResult<bool>;
    fn get_by_id(&self, id: SportId) -> RepoResult<Option<Sport>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<SportId>>;
    fn get_name_by_id(&self, id: SportId) -> RepoResult<Option<String>>;
    fn list_all(&self) -> RepoResult<Vec<Sport>>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed sport repository.
pub struct SqliteSportRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSportRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SportRepository for SqliteSportRepository<'_> {
    fn insert(&self, sport: &Sport) -> RepoResult<SportId> {
        sport.validate()?;

        self.conn.execute(
            "INSERT INTO sport (id_sport, name) VALUES (?1, ?2);",
            params![sport.id, sport.name.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=sport_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, sport: &Sport) -> RepoResult<bool> {
        sport.validate()?;
        let Some(id) = sport.id else {
            return Ok(false);
        };

        execute_changed(
            self.conn,
            "UPDATE sport SET name = ?1 WHERE id_sport = ?2;",
            params![sport.name.as_str(), id],
        )
    }

    fn delete(&self, id: SportId) -> RepoResult<bool> {
        execute_changed(self.conn, "DELETE FROM sport WHERE id_sport = ?1;", [id])
    }

    fn get_by_id(&self, id: SportId) -> RepoResult<Option<Sport>> {
        query_one(
            self.conn,
            "SELECT id_sport, name FROM sport WHERE id_sport = ?1;",
            [id],
            parse_sport_row,
        )
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<SportId>> {
        id_by_name(
            self.conn,
            "SELECT id_sport FROM sport WHERE name = ?1 ORDER BY id_sport ASC LIMIT 1;",
            name,
        )
    }

    fn get_name_by_id(&self, id: SportId) -> RepoResult<Option<String>> {
        name_by_id(self.conn, "SELECT name FROM sport WHERE id_sport = ?1;", id)
    }

    fn list_all(&self) -> RepoResult<Vec<Sport>> {
        query_all(
            self.conn,
            "SELECT id_sport, name FROM sport ORDER BY id_sport ASC;",
            [],
            parse_sport_row,
        )
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        names(self.conn, "SELECT name FROM sport ORDER BY id_sport ASC;")
    }
}

fn parse_sport_row(row: &Row<'_>) -> RepoResult<Sport> {
    Ok(Sport {
        id: Some(row.get("id_sport")?),
        name: row.get("name")?,
    })
}
