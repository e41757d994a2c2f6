//! Core data-access layer for the Olympics catalog.
//! This crate owns the catalog schema and its referential rules.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::athlete::{Athlete, AthleteId, Sex};
pub use model::event::{Event, EventId};
pub use model::olympiad::{Olympiad, OlympiadId, Season};
pub use model::participation::{Medal, Participation, ParticipationKey};
pub use model::sport::{Sport, SportId};
pub use model::team::{Team, TeamId};
pub use model::validation::ValidationError;
pub use repo::athlete_repo::{AthleteRepository, SqliteAthleteRepository};
pub use repo::browse::{browse_table, TableKind, TableView};
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::integrity::{ReferenceGuard, ReferenceTable};
pub use repo::olympiad_repo::{OlympiadRepository, SqliteOlympiadRepository};
pub use repo::participation_repo::{ParticipationRepository, SqliteParticipationRepository};
pub use repo::sport_repo::{SportRepository, SqliteSportRepository};
pub use repo::team_repo::{SqliteTeamRepository, TeamRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
