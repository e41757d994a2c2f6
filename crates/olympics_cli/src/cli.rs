//! Command-line definition for the catalog tool.

use clap::{Args, Parser, Subcommand};
use olympics_core::{AppConfig, Medal, Season, Sex, TableKind};
use std::path::PathBuf;

/// Browse and edit an Olympic Games reference catalog.
#[derive(Debug, Parser)]
#[command(name = "olympics", version, about)]
pub struct Cli {
    /// Catalog database file (default: $OLYMPICS_DB or ./olympics.sqlite3)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long = "log-dir", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Layers command-line flags over `base`.
    pub fn resolve_config(&self, base: AppConfig) -> AppConfig {
        let mut config = base;
        if let Some(db) = &self.db {
            config = config.with_db_path(db.clone());
        }
        if let Some(level) = &self.log_level {
            config = config.with_log_level(level.clone());
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_log_dir(dir.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog tables
    Tables,
    /// Print every row of a table
    List {
        #[arg(value_parser = parse_table)]
        table: TableKind,
        /// Keep rows where any column contains this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print the names stored in a table
    Names {
        #[arg(value_parser = parse_table)]
        table: TableKind,
    },
    /// Insert a row
    #[command(subcommand)]
    Add(AddCommand),
    /// Rewrite an existing row
    #[command(subcommand)]
    Update(UpdateCommand),
    /// Delete a row by id
    Delete {
        #[arg(value_parser = parse_table)]
        table: TableKind,
        /// Row id (athlete id for participations)
        id: i64,
        /// Event id, required for participations
        #[arg(long = "event-id")]
        event_id: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AddCommand {
    Sport {
        #[arg(long)]
        name: String,
    },
    Team {
        #[arg(long)]
        name: String,
        #[arg(long)]
        initials: String,
    },
    Olympiad {
        #[arg(long)]
        name: String,
        #[arg(long)]
        year: u32,
        #[arg(long, value_parser = parse_season)]
        season: Season,
        #[arg(long)]
        city: String,
    },
    Athlete(AddAthleteArgs),
    Event {
        #[arg(long)]
        name: String,
        #[arg(long = "olympiad-id")]
        olympiad_id: i64,
        #[arg(long = "sport-id")]
        sport_id: i64,
    },
    Participation {
        #[arg(long = "athlete-id")]
        athlete_id: i64,
        #[arg(long = "event-id")]
        event_id: i64,
        #[arg(long = "team-id")]
        team_id: i64,
        #[arg(long, value_parser = parse_medal, default_value = "None")]
        medal: Medal,
    },
}

#[derive(Debug, Args)]
pub struct AddAthleteArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_parser = parse_sex)]
    pub sex: Sex,
    #[arg(long)]
    pub age: u32,
    /// Kilograms
    #[arg(long)]
    pub weight: f64,
    /// Centimetres
    #[arg(long)]
    pub height: f64,
    /// Image file stored as the athlete photo
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

/// Every column is rewritten, so each flag is required except the photo.
#[derive(Debug, Subcommand)]
pub enum UpdateCommand {
    Sport {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
    },
    Team {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        initials: String,
    },
    Olympiad {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        year: u32,
        #[arg(long, value_parser = parse_season)]
        season: Season,
        #[arg(long)]
        city: String,
    },
    Athlete(UpdateAthleteArgs),
    Event {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long = "olympiad-id")]
        olympiad_id: i64,
        #[arg(long = "sport-id")]
        sport_id: i64,
    },
    /// Change team and medal of the participation keyed by athlete and event
    Participation {
        #[arg(long = "athlete-id")]
        athlete_id: i64,
        #[arg(long = "event-id")]
        event_id: i64,
        #[arg(long = "team-id")]
        team_id: i64,
        #[arg(long, value_parser = parse_medal)]
        medal: Medal,
    },
}

#[derive(Debug, Args)]
pub struct UpdateAthleteArgs {
    #[arg(long)]
    pub id: i64,
    // Without `--photo` the stored photo is kept.
    #[command(flatten)]
    pub fields: AddAthleteArgs,
}

fn parse_table(value: &str) -> Result<TableKind, String> {
    value.parse::<TableKind>().map_err(|err| err.to_string())
}

fn parse_season(value: &str) -> Result<Season, String> {
    Season::parse(value).map_err(|err| err.to_string())
}

fn parse_sex(value: &str) -> Result<Sex, String> {
    Sex::parse(value).map_err(|err| err.to_string())
}

fn parse_medal(value: &str) -> Result<Medal, String> {
    Medal::parse(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{AddCommand, Cli, Command, UpdateCommand};
    use clap::{CommandFactory, Parser};
    use olympics_core::{AppConfig, Medal, Season, TableKind};
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_table_and_filter() {
        let cli = Cli::parse_from(["olympics", "list", "Athletes", "--filter", "doe"]);
        match cli.command {
            Command::List { table, filter } => {
                assert_eq!(table, TableKind::Athlete);
                assert_eq!(filter.as_deref(), Some("doe"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_table_is_rejected() {
        assert!(Cli::try_parse_from(["olympics", "list", "medals"]).is_err());
    }

    #[test]
    fn add_olympiad_parses_season_and_participation_defaults_medal() {
        let cli = Cli::parse_from([
            "olympics", "add", "olympiad", "--name", "2024 Paris", "--year", "2024", "--season",
            "Summer", "--city", "Paris",
        ]);
        assert!(matches!(
            cli.command,
            Command::Add(AddCommand::Olympiad {
                season: Season::Summer,
                year: 2024,
                ..
            })
        ));

        let cli = Cli::parse_from([
            "olympics",
            "add",
            "participation",
            "--athlete-id",
            "1",
            "--event-id",
            "2",
            "--team-id",
            "3",
        ]);
        assert!(matches!(
            cli.command,
            Command::Add(AddCommand::Participation {
                medal: Medal::None,
                ..
            })
        ));
    }

    #[test]
    fn flags_override_base_config() {
        let cli = Cli::parse_from(["olympics", "--db", "/tmp/games.sqlite3", "tables"]);
        let config = cli.resolve_config(AppConfig::default().with_log_level("warn"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/games.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn update_requires_id_and_parses_participation_key() {
        let cli = Cli::parse_from([
            "olympics", "update", "sport", "--id", "4", "--name", "Artistic Swimming",
        ]);
        assert!(matches!(
            cli.command,
            Command::Update(UpdateCommand::Sport { id: 4, .. })
        ));
        assert!(Cli::try_parse_from(["olympics", "update", "sport", "--name", "Judo"]).is_err());

        let cli = Cli::parse_from([
            "olympics", "update", "athlete", "--id", "2", "--name", "Jane Doe", "--sex", "F",
            "--age", "25", "--weight", "61", "--height", "170",
        ]);
        match cli.command {
            Command::Update(UpdateCommand::Athlete(args)) => {
                assert_eq!(args.id, 2);
                assert_eq!(args.fields.age, 25);
                assert!(args.fields.photo.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from([
            "olympics",
            "update",
            "participation",
            "--athlete-id",
            "1",
            "--event-id",
            "2",
            "--team-id",
            "3",
            "--medal",
            "Gold",
        ]);
        assert!(matches!(
            cli.command,
            Command::Update(UpdateCommand::Participation {
                athlete_id: 1,
                event_id: 2,
                medal: Medal::Gold,
                ..
            })
        ));
    }
}
