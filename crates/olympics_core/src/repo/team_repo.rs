//! Team repository contract and SQLite implementation.

use crate::model::team::{Team, TeamId};
use crate::repo::named::{execute_changed, id_by_name, name_by_id, names, query_all, query_one};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, Row};

pub trait TeamRepository {
    fn insert(&self, team: &Team) -> RepoResult<TeamId>;
    fn update(&self, team: &Team) -> RepoResult<bool>;
    fn delete(&self, id: TeamId) -> RepoResult<bool>;
    fn get_by_id(&self, id: TeamId) -> RepoResult<Option<Team>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<TeamId>>;
    fn get_name_by_id(&self, id: TeamId) -> RepoResult<Option<String>>;
    fn list_all(&self) -> RepoResult<Vec<Team>>;
    fn list_names(&self) -> RepoResult<Vec<String>>;
}

pub struct SqliteTeamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TeamRepository for SqliteTeamRepository<'_> {
    fn insert(&self, team: &Team) -> RepoResult<TeamId> {
        team.validate()?;

        self.conn.execute(
            "INSERT INTO team (id_team, name, initials) VALUES (?1, ?2, ?3);",
            params![team.id, team.name.as_str(), team.initials.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("event=team_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, team: &Team) -> RepoResult<bool> {
        team.validate()?;
        let Some(id) = team.id else {
            return Ok(false);
        };

        execute_changed(
            self.conn,
            "UPDATE team SET name = ?1, initials = ?2 WHERE id_team = ?3;",
            params![team.name.as_str(), team.initials.as_str(), id],
        )
    }

    fn delete(&self, id: TeamId) -> RepoResult<bool> {
        execute_changed(self.conn, "DELETE FROM team WHERE id_team = ?1;", [id])
    }

    fn get_by_id(&self, id: TeamId) -> RepoResult<Option<Team>> {
        query_one(
            self.conn,
            "SELECT id_team, name, initials FROM team WHERE id_team = ?1;",
            [id],
            parse_team_row,
        )
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<TeamId>> {
        id_by_name(
            self.conn,
            "SELECT id_team FROM team WHERE name = ?1 ORDER BY id_team ASC LIMIT 1;",
            name,
        )
    }

    fn get_name_by_id(&self, id: TeamId) -> RepoResult<Option<String>> {
        name_by_id(self.conn, "SELECT name FROM team WHERE id_team = ?1;", id)
    }

    fn list_all(&self) -> RepoResult<Vec<Team>> {
        query_all(
            self.conn,
            "SELECT id_team, name, initials FROM team ORDER BY id_team ASC;",
            [],
            parse_team_row,
        )
    }

    fn list_names(&self) -> RepoResult<Vec<String>> {
        names(self.conn, "SELECT name FROM team ORDER BY id_team ASC;")
    }
}

fn parse_team_row(row: &Row<'_>) -> RepoResult<Team> {
    Ok(Team {
        id: Some(row.get("id_team")?),
        name: row.get("name")?,
        initials: row.get("initials")?,
    })
}
