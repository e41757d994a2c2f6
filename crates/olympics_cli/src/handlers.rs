//! Command handlers. Each handler writes its report to `out`.

use crate::cli::{AddAthleteArgs, AddCommand, Command, UpdateAthleteArgs, UpdateCommand};
use anyhow::{bail, Context, Result};
use log::info;
use olympics_core::{
    Athlete, AthleteRepository, Catalog, Event, EventRepository, Olympiad, OlympiadRepository,
    Participation, ParticipationKey, ParticipationRepository, Sport, SportRepository, TableKind,
    TableView, Team, TeamRepository,
};
use std::io::Write;

pub fn dispatch(catalog: &Catalog, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Tables => {
            for kind in TableKind::ALL {
                writeln!(out, "{kind}\t{}", catalog.count(kind)?)?;
            }
        }
        Command::List { table, filter } => {
            let view = catalog.browse(table, filter.as_deref())?;
            write_view(&view, out)?;
        }
        Command::Names { table } => {
            for name in list_names(catalog, table)? {
                writeln!(out, "{name}")?;
            }
        }
        Command::Add(add) => add_row(catalog, add, out)?,
        Command::Update(update) => update_row(catalog, update, out)?,
        Command::Delete {
            table,
            id,
            event_id,
        } => {
            let removed = delete_row(catalog, table, id, event_id)?;
            if !removed {
                bail!("no {table} row matched id {id}");
            }
            info!("event=cli_delete module=cli status=ok table={table} id={id}");
            writeln!(out, "deleted {table} {id}")?;
        }
    }
    Ok(())
}

fn write_view(view: &TableView, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", view.columns.join("\t"))?;
    for row in &view.rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn list_names(catalog: &Catalog, table: TableKind) -> Result<Vec<String>> {
    if !table.is_named() {
        bail!("{table} rows have no name column");
    }
    let names = match table {
        TableKind::Sport => catalog.sports().list_names()?,
        TableKind::Athlete => catalog.athletes().list_names()?,
        TableKind::Team => catalog.teams().list_names()?,
        TableKind::Olympiad => catalog.olympiads().list_names()?,
        TableKind::Event => catalog.events().list_names()?,
        // Rejected above.
        TableKind::Participation => Vec::new(),
    };
    Ok(names)
}

fn add_row(catalog: &Catalog, add: AddCommand, out: &mut impl Write) -> Result<()> {
    let (table, id) = match add {
        AddCommand::Sport { name } => (TableKind::Sport, catalog.sports().insert(&Sport::new(name))?),
        AddCommand::Team { name, initials } => (
            TableKind::Team,
            catalog.teams().insert(&Team::new(name, initials))?,
        ),
        AddCommand::Olympiad {
            name,
            year,
            season,
            city,
        } => (
            TableKind::Olympiad,
            catalog
                .olympiads()
                .insert(&Olympiad::new(name, year, season, city))?,
        ),
        AddCommand::Athlete(args) => (
            TableKind::Athlete,
            catalog.athletes().insert(&athlete_from_args(args)?)?,
        ),
        AddCommand::Event {
            name,
            olympiad_id,
            sport_id,
        } => (
            TableKind::Event,
            catalog
                .events()
                .insert(&Event::new(name, olympiad_id, sport_id))?,
        ),
        AddCommand::Participation {
            athlete_id,
            event_id,
            team_id,
            medal,
        } => {
            let key = catalog.participations().insert(&Participation::new(
                athlete_id, event_id, team_id, medal,
            ))?;
            writeln!(
                out,
                "added participation athlete={} event={}",
                key.athlete_id, key.event_id
            )?;
            return Ok(());
        }
    };

    info!("event=cli_add module=cli status=ok table={table} id={id}");
    writeln!(out, "added {table} {id}")?;
    Ok(())
}

fn update_row(catalog: &Catalog, update: UpdateCommand, out: &mut impl Write) -> Result<()> {
    let (table, id, updated) = match update {
        UpdateCommand::Sport { id, name } => {
            let sport = Sport {
                id: Some(id),
                ..Sport::new(name)
            };
            (TableKind::Sport, id, catalog.sports().update(&sport)?)
        }
        UpdateCommand::Team { id, name, initials } => {
            let team = Team {
                id: Some(id),
                ..Team::new(name, initials)
            };
            (TableKind::Team, id, catalog.teams().update(&team)?)
        }
        UpdateCommand::Olympiad {
            id,
            name,
            year,
            season,
            city,
        } => {
            let olympiad = Olympiad {
                id: Some(id),
                ..Olympiad::new(name, year, season, city)
            };
            (
                TableKind::Olympiad,
                id,
                catalog.olympiads().update(&olympiad)?,
            )
        }
        UpdateCommand::Athlete(args) => {
            let id = args.id;
            (TableKind::Athlete, id, update_athlete(catalog, args)?)
        }
        UpdateCommand::Event {
            id,
            name,
            olympiad_id,
            sport_id,
        } => {
            let event = Event {
                id: Some(id),
                ..Event::new(name, olympiad_id, sport_id)
            };
            (TableKind::Event, id, catalog.events().update(&event)?)
        }
        UpdateCommand::Participation {
            athlete_id,
            event_id,
            team_id,
            medal,
        } => {
            let participation = Participation::new(athlete_id, event_id, team_id, medal);
            if !catalog.participations().update(&participation)? {
                bail!("no participation row matched athlete {athlete_id} and event {event_id}");
            }
            info!(
                "event=cli_update module=cli status=ok table=participation athlete_id={athlete_id} event_id={event_id}"
            );
            writeln!(
                out,
                "updated participation athlete={athlete_id} event={event_id}"
            )?;
            return Ok(());
        }
    };

    if !updated {
        bail!("no {table} row matched id {id}");
    }
    info!("event=cli_update module=cli status=ok table={table} id={id}");
    writeln!(out, "updated {table} {id}")?;
    Ok(())
}

/// Keeps the stored photo unless a new one is given.
fn update_athlete(catalog: &Catalog, args: UpdateAthleteArgs) -> Result<bool> {
    let repo = catalog.athletes();
    let Some(stored) = repo.get_by_id(args.id)? else {
        return Ok(false);
    };
    let mut athlete = athlete_from_args(args.fields)?;
    athlete.id = Some(args.id);
    if athlete.photo.is_none() {
        athlete.photo = stored.photo;
    }
    Ok(repo.update(&athlete)?)
}

fn athlete_from_args(args: AddAthleteArgs) -> Result<Athlete> {
    let mut athlete = Athlete::new(args.name, args.sex, args.age, args.weight, args.height);
    if let Some(path) = args.photo {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("failed to read photo `{}`", path.display()))?;
        athlete.photo = Some(bytes);
    }
    Ok(athlete)
}

fn delete_row(
    catalog: &Catalog,
    table: TableKind,
    id: i64,
    event_id: Option<i64>,
) -> Result<bool> {
    let removed = match table {
        TableKind::Sport => catalog.sports().delete(id)?,
        TableKind::Athlete => catalog.athletes().delete(id)?,
        TableKind::Team => catalog.teams().delete(id)?,
        TableKind::Olympiad => catalog.olympiads().delete(id)?,
        TableKind::Event => catalog.events().delete(id)?,
        TableKind::Participation => {
            let Some(event_id) = event_id else {
                bail!("deleting a participation needs --event-id");
            };
            catalog.participations().delete(ParticipationKey {
                athlete_id: id,
                event_id,
            })?
        }
    };
    Ok(removed)
}
