//! Olympiad repository contract and SQLite implementation.
//!
//! # Invariants
//! - `season` is stored with its lowercase spelling; an unknown spelling read
//!   back is reported as `RepoError::InvalidData`.
//! - Name lookups follow the same rules as every other named entity: exact
//!   match, lowest id wins.

use crate::model::olympiad::{Olympiad, OlympiadId, Season};
use crate::repo::named::{
    execute_changed, id_by_name, name_by_id, names, non_negative_u32, query_all, query_one,
};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait OlympiadRepository {
    fn insert(&self, olympiad: &Olympiad) -> RepoResult<OlympiadId>;
    fn update(&self, olympiad: &Olympiad) -> RepoResult<bool>;
    fn delete(&self, id: OlympiadId) -> RepoResult<bool>;
    fn get_by_id(&self, id: OlympiadId) -> RepoResult<Option<Olympiad>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<OlympiadId>>;
    fn get_name_by_id(&self, id: OlympiadId) -> RepoResult<Option<String>>;
    fn list_all(&self) -> RepoResult<Vec<Olympiad>>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed olympiad repository.
pub struct SqliteOlympiadRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOlympiadRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl OlympiadRepository for SqliteOlympiadRepository<'_> {
    fn insert(&self, olympiad: &Olympiad) -> RepoResult<OlympiadId> {
        olympiad.validate()?;

        self.conn.execute(
            "INSERT INTO olympiad (id_olympiad, name, year, season, city)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                olympiad.id,
                olympiad.name.as_str(),
                olympiad.year,
                olympiad.season.as_str(),
                olympiad.city.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=olympiad_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, olympiad: &Olympiad) -> RepoResult<bool> {
        olympiad.validate()?;
        let Some(id) = olympiad.id else {
            return Ok(false);
        };

        execute_changed(
            self.conn,
            "UPDATE olympiad
             SET
                name = ?1,
                year = ?2,
                season = ?3,
                city = ?4
             WHERE id_olympiad = ?5;",
            params![
                olympiad.name.as_str(),
                olympiad.year,
                olympiad.season.as_str(),
                olympiad.city.as_str(),
                id,
            ],
        )
    }

    fn delete(&self, id: OlympiadId) -> RepoResult<bool> {
        execute_changed(
            self.conn,
            "DELETE FROM olympiad WHERE id_olympiad = ?1;",
            [id],
        )
    }

    fn get_by_id(&self, id: OlympiadId) -> RepoResult<Option<Olympiad>> {
        query_one(
            self.conn,
            "SELECT id_olympiad, name, year, season, city
             FROM olympiad
             WHERE id_olympiad = ?1;",
            [id],
            parse_olympiad_row,
        )
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<OlympiadId>> {
        id_by_name(
            self.conn,
            "SELECT id_olympiad FROM olympiad WHERE name = ?1 ORDER BY id_olympiad ASC LIMIT 1;",
            name,
        )
    }

    fn get_name_by_id(&self, id: OlympiadId) -> RepoResult<Option<String>> {
        name_by_id(
            self.conn,
            "SELECT name FROM olympiad WHERE id_olympiad = ?1;",
            id,
        )
    }

    fn list_all(&self) -> RepoResult<Vec<Olympiad>> {
        query_all(
            self.conn,
            "SELECT id_olympiad, name, year, season, city
             FROM olympiad
             ORDER BY id_olympiad ASC;",
            [],
            parse_olympiad_row,
        )
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        names(
            self.conn,
            "SELECT name FROM olympiad ORDER BY id_olympiad ASC;",
        )
    }
}

fn parse_olympiad_row(row: &Row<'_>) -> RepoResult<Olympiad> {
    let season_text: String = row.get("season")?;
    let season = Season::parse(&season_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid season `{season_text}` in olympiad.season"
        ))
    })?;

    Ok(Olympiad {
        id: Some(row.get("id_olympiad")?),
        name: row.get("name")?,
        year: non_negative_u32("olympiad", "year", row.get("year")?)?,
        season,
        city: row.get("city")?,
    })
}
