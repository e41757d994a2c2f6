//! Participation repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over the `participation` join table keyed by
//!   `(id_athlete, id_event)`.
//!
//! # Invariants
//! - `insert` verifies athlete, event and team through `ReferenceGuard`
//!   before the `INSERT`. Any missing target aborts the insert.
//! - A second row for the same `(athlete, event)` pair is rejected by the
//!   composite primary key and surfaces as `RepoError::Db`.
//! - `update` rewrites only `team` and `medal`; the key is immutable.

use crate::model::athlete::AthleteId;
use crate::model::event::EventId;
use crate::model::participation::{Medal, Participation, ParticipationKey};
use crate::model::team::TeamId;
use crate::repo::integrity::ReferenceGuard;
use crate::repo::named::{execute_changed, query_all, query_one};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

/// Repository interface for participations.
pub trait ParticipationRepository {
    /// Inserts the participation and returns its composite key.
    fn insert(&self, participation: &Participation) -> RepoResult<ParticipationKey>;
    /// Updates team and medal of the row keyed by `participation.key()`.
    fn update(&self, participation: &Participation) -> RepoResult<bool>;
    fn delete(&self, key: ParticipationKey) -> RepoResult<bool>;
    fn get(&self, key: ParticipationKey) -> RepoResult<Option<Participation>>;
    /// Returns whether the exact `(athlete, event, team)` triple is stored.
    fn exists(
        &self,
        athlete_id: AthleteId,
        event_id: EventId,
        team_id: TeamId,
    ) -> RepoResult<bool>;
    /// All rows ordered by athlete id, then event id.
    fn list_all(&self) -> RepoResult<Vec<Participation>>;
    fn list_for_event(&self, event_id: EventId) -> RepoResult<Vec<Participation>>;
    fn list_for_athlete(&self, athlete_id: AthleteId) -> RepoResult<Vec<Participation>>;
}

/// SQLite-backed participation repository.
pub struct SqliteParticipationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParticipationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParticipationRepository for SqliteParticipationRepository<'_> {
    fn insert(&self, participation: &Participation) -> RepoResult<ParticipationKey> {
        ReferenceGuard::new(self.conn).check_participation(participation)?;

        self.conn.execute(
            "INSERT INTO participation (id_athlete, id_event, id_team, medal)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                participation.athlete_id,
                participation.event_id,
                participation.team_id,
                participation.medal.as_str(),
            ],
        )?;

        debug!(
            "event=participation_insert module=repo status=ok athlete_id={} event_id={} team_id={} medal={}",
            participation.athlete_id,
            participation.event_id,
            participation.team_id,
            participation.medal.as_str()
        );
        Ok(participation.key())
    }

    fn update(&self, participation: &Participation) -> RepoResult<bool> {
        execute_changed(
            self.conn,
            "UPDATE participation
             SET
                id_team = ?1,
                medal = ?2
             WHERE id_athlete = ?3
               AND id_event = ?4;",
            params![
                participation.team_id,
                participation.medal.as_str(),
                participation.athlete_id,
                participation.event_id,
            ],
        )
    }

    fn delete(&self, key: ParticipationKey) -> RepoResult<bool> {
        execute_changed(
            self.conn,
            "DELETE FROM participation WHERE id_athlete = ?1 AND id_event = ?2;",
            [key.athlete_id, key.event_id],
        )
    }

    fn get(&self, key: ParticipationKey) -> RepoResult<Option<Participation>> {
        query_one(
            self.conn,
            "SELECT id_athlete, id_event, id_team, medal
             FROM participation
             WHERE id_athlete = ?1
               AND id_event = ?2;",
            [key.athlete_id, key.event_id],
            parse_participation_row,
        )
    }

    fn exists(
        &self,
        athlete_id: AthleteId,
        event_id: EventId,
        team_id: TeamId,
    ) -> RepoResult<bool> {
        let found = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM participation
                WHERE id_athlete = ?1
                  AND id_event = ?2
                  AND id_team = ?3
            );",
            [athlete_id, event_id, team_id],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(found == 1)
    }

    fn list_all(&self) -> RepoResult<Vec<Participation>> {
        query_all(
            self.conn,
            "SELECT id_athlete, id_event, id_team, medal
             FROM participation
             ORDER BY id_athlete ASC, id_event ASC;",
            [],
            parse_participation_row,
        )
    }

    fn list_for_event(&self, event_id: EventId) -> RepoResult<Vec<Participation>> {
        query_all(
            self.conn,
            "SELECT id_athlete, id_event, id_team, medal
             FROM participation
             WHERE id_event = ?1
             ORDER BY id_athlete ASC;",
            [event_id],
            parse_participation_row,
        )
    }

    fn list_for_athlete(&self, athlete_id: AthleteId) -> RepoResult<Vec<Participation>> {
        query_all(
            self.conn,
            "SELECT id_athlete, id_event, id_team, medal
             FROM participation
             WHERE id_athlete = ?1
             ORDER BY id_event ASC;",
            [athlete_id],
            parse_participation_row,
        )
    }
}

fn parse_participation_row(row: &Row<'_>) -> RepoResult<Participation> {
    let medal_text: String = row.get("medal")?;
    let medal = Medal::parse(&medal_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid medal `{medal_text}` in participation.medal"
        ))
    })?;

    Ok(Participation {
        athlete_id: row.get("id_athlete")?,
        event_id: row.get("id_event")?,
        team_id: row.get("id_team")?,
        medal,
    })
}
