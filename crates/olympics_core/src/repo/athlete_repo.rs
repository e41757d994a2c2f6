//! Athlete repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD and name lookups over the `athlete` table, photo BLOB included.
//!
//! # Invariants
//! - Writes call `Athlete::validate()` first.
//! - Read paths reject undecodable `sex` or negative `age` values instead of
//!   masking them.

use crate::model::athlete::{Athlete, AthleteId, Sex};
use crate::repo::named::{
    execute_changed, id_by_name, name_by_id, names, non_negative_u32, query_all, query_one,
};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait AthleteRepository {
    fn insert(&self, athlete: &Athlete) -> RepoResult<AthleteId>;
    /// Rewrites every column, photo included. `false` when no row matched.
    fn update(&self, athlete: &Athlete) -> RepoResult<bool>;
    fn delete(&self, id: AthleteId) -> RepoResult<bool>;
    fn get_by_id(&self, id: AthleteId) -> RepoResult<Option<Athlete>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<AthleteId>>;
    fn get_name_by_id(&self, id: AthleteId) -> RepoResult<Option<String>>;
    fn list_all(&self) -> RepoResult<Vec<Athlete>>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed athlete repository.
pub struct SqliteAthleteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAthleteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AthleteRepository for SqliteAthleteRepository<'_> {
    fn insert(&self, athlete: &Athlete) -> RepoResult<AthleteId> {
        athlete.validate()?;

        self.conn.execute(
            "INSERT INTO athlete (
                id_athlete,
                name,
                sex,
                age,
                weight,
                height,
                photo
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                athlete.id,
                athlete.name.as_str(),
                athlete.sex.as_str(),
                athlete.age,
                athlete.weight,
                athlete.height,
                athlete.photo.as_deref(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(
            "event=athlete_insert module=repo status=ok id={id} photo_bytes={}",
            athlete.photo.as_ref().map_or(0, Vec::len)
        );
        Ok(id)
    }

    fn update(&self, athlete: &Athlete) -> RepoResult<bool> {
        athlete.validate()?;
        let Some(id) = athlete.id else {
            return Ok(false);
        };

        execute_changed(
            self.conn,
            "UPDATE athlete
             SET
                name = ?1,
                sex = ?2,
                age = ?3,
                weight = ?4,
                height = ?5,
                photo = ?6
             WHERE id_athlete = ?7;",
            params![
                athlete.name.as_str(),
                athlete.sex.as_str(),
                athlete.age,
                athlete.weight,
                athlete.height,
                athlete.photo.as_deref(),
                id,
            ],
        )
    }

    fn delete(&self, id: AthleteId) -> RepoResult<bool> {
        execute_changed(
            self.conn,
            "DELETE FROM athlete WHERE id_athlete = ?1;",
            [id],
        )
    }

    fn get_by_id(&self, id: AthleteId) -> RepoResult<Option<Athlete>> {
        query_one(
            self.conn,
            "SELECT id_athlete, name, sex, age, weight, height, photo
             FROM athlete
             WHERE id_athlete = ?1;",
            [id],
            parse_athlete_row,
        )
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<AthleteId>> {
        id_by_name(
            self.conn,
            "SELECT id_athlete FROM athlete WHERE name = ?1 ORDER BY id_athlete ASC LIMIT 1;",
            name,
        )
    }

    fn get_name_by_id(&self, id: AthleteId) -> RepoResult<Option<String>> {
        name_by_id(
            self.conn,
            "SELECT name FROM athlete WHERE id_athlete = ?1;",
            id,
        )
    }

    fn list_all(&self) -> RepoResult<Vec<Athlete>> {
        query_all(
            self.conn,
            "SELECT id_athlete, name, sex, age, weight, height, photo
             FROM athlete
             ORDER BY id_athlete ASC;",
            [],
            parse_athlete_row,
        )
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        names(self.conn, "SELECT name FROM athlete ORDER BY id_athlete ASC;")
    }
}

fn parse_athlete_row(row: &Row<'_>) -> RepoResult<Athlete> {
    let sex_text: String = row.get("sex")?;
    let sex = Sex::parse(&sex_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid sex `{sex_text}` in athlete.sex"))
    })?;

    Ok(Athlete {
        id: Some(row.get("id_athlete")?),
        name: row.get("name")?,
        sex,
        age: non_negative_u32("athlete", "age", row.get("age")?)?,
        weight: row.get("weight")?,
        height: row.get("height")?,
        photo: row.get("photo")?,
    })
}
