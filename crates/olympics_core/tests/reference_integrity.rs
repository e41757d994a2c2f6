use olympics_core::{
    Athlete, AthleteRepository, Catalog, Event, EventRepository, Medal, Olympiad,
    OlympiadRepository, Participation, ParticipationKey, ParticipationRepository,
    ReferenceTable, RepoError, Season, Sex, Sport, SportRepository, TableKind, Team,
    TeamRepository,
};

struct Seeded {
    catalog: Catalog,
    athlete_id: i64,
    event_id: i64,
    team_id: i64,
}

/// Swimming / 2024 Paris / 100m Freestyle, Jane Doe, Team A.
fn seeded() -> Seeded {
    let catalog = Catalog::open_in_memory().unwrap();
    let sport_id = catalog.sports().insert(&Sport::new("Swimming")).unwrap();
    let olympiad_id = catalog
        .olympiads()
        .insert(&Olympiad::new("2024 Paris", 2024, Season::Summer, "Paris"))
        .unwrap();
    let event_id = catalog
        .events()
        .insert(&Event::new("100m Freestyle", olympiad_id, sport_id))
        .unwrap();
    let athlete_id = catalog
        .athletes()
        .insert(&Athlete::new("Jane Doe", Sex::F, 25, 60.5, 170.2))
        .unwrap();
    let team_id = catalog
        .teams()
        .insert(&Team::new("Team A", "TMA"))
        .unwrap();

    Seeded {
        catalog,
        athlete_id,
        event_id,
        team_id,
    }
}

#[test]
fn event_with_missing_sport_is_rejected_before_any_write() {
    let catalog = Catalog::open_in_memory().unwrap();
    let sport_id = catalog.sports().insert(&Sport::new("Swimming")).unwrap();
    let olympiad_id = catalog
        .olympiads()
        .insert(&Olympiad::new("2024 Paris", 2024, Season::Summer, "Paris"))
        .unwrap();
    assert_eq!((sport_id, olympiad_id), (1, 1));

    let event_id = catalog
        .events()
        .insert(&Event::new("100m Freestyle", olympiad_id, sport_id))
        .unwrap();
    assert_eq!(event_id, 1);

    let err = catalog
        .events()
        .insert(&Event::new("200m Freestyle", olympiad_id, 99))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidReference {
            table: ReferenceTable::Sport,
            id: 99
        }
    ));
    assert_eq!(catalog.count(TableKind::Event).unwrap(), 1);
}

#[test]
fn event_with_missing_olympiad_is_rejected() {
    let catalog = Catalog::open_in_memory().unwrap();
    let sport_id = catalog.sports().insert(&Sport::new("Diving")).unwrap();

    let err = catalog
        .events()
        .insert(&Event::new("10m Platform", 5, sport_id))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidReference {
            table: ReferenceTable::Olympiad,
            id: 5
        }
    ));
    assert_eq!(catalog.count(TableKind::Event).unwrap(), 0);
}

#[test]
fn participation_insert_succeeds_when_all_references_exist() {
    let seeded = seeded();
    let repo = seeded.catalog.participations();

    let participation = Participation::new(
        seeded.athlete_id,
        seeded.event_id,
        seeded.team_id,
        Medal::Gold,
    );
    let key = repo.insert(&participation).unwrap();

    assert_eq!(
        key,
        ParticipationKey {
            athlete_id: seeded.athlete_id,
            event_id: seeded.event_id
        }
    );
    assert_eq!(repo.get(key).unwrap(), Some(participation));
    assert!(repo
        .exists(seeded.athlete_id, seeded.event_id, seeded.team_id)
        .unwrap());
    assert!(!repo
        .exists(seeded.athlete_id, seeded.event_id, seeded.team_id + 1)
        .unwrap());
}

#[test]
fn participation_with_any_missing_reference_is_rejected() {
    let seeded = seeded();
    let repo = seeded.catalog.participations();
    let (athlete, event, team) = (seeded.athlete_id, seeded.event_id, seeded.team_id);

    let cases = [
        (Participation::new(999, event, team, Medal::None), ReferenceTable::Athlete),
        (Participation::new(athlete, 999, team, Medal::None), ReferenceTable::Event),
        (Participation::new(athlete, event, 999, Medal::None), ReferenceTable::Team),
    ];

    for (participation, expected_table) in cases {
        match repo.insert(&participation).unwrap_err() {
            RepoError::InvalidReference { table, id } => {
                assert_eq!(table, expected_table);
                assert_eq!(id, 999);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn duplicate_participation_key_violates_primary_key() {
    let seeded = seeded();
    let repo = seeded.catalog.participations();

    repo.insert(&Participation::new(
        seeded.athlete_id,
        seeded.event_id,
        seeded.team_id,
        Medal::Gold,
    ))
    .unwrap();

    let err = repo
        .insert(&Participation::new(
            seeded.athlete_id,
            seeded.event_id,
            seeded.team_id,
            Medal::Silver,
        ))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(err.is_constraint_violation());
    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn participation_update_and_delete_are_keyed_by_athlete_and_event() {
    let seeded = seeded();
    let repo = seeded.catalog.participations();
    let team_b = seeded
        .catalog
        .teams()
        .insert(&Team::new("Team B", "TMB"))
        .unwrap();

    let mut participation = Participation::new(
        seeded.athlete_id,
        seeded.event_id,
        seeded.team_id,
        Medal::None,
    );
    let key = repo.insert(&participation).unwrap();

    participation.team_id = team_b;
    participation.medal = Medal::Bronze;
    assert!(repo.update(&participation).unwrap());
    assert_eq!(repo.get(key).unwrap(), Some(participation.clone()));

    let mut missing = participation.clone();
    missing.event_id += 1;
    assert!(!repo.update(&missing).unwrap());
    assert!(!repo.delete(missing.key()).unwrap());

    assert_eq!(repo.list_for_event(seeded.event_id).unwrap().len(), 1);
    assert_eq!(repo.list_for_athlete(seeded.athlete_id).unwrap().len(), 1);
    assert!(repo.delete(key).unwrap());
    assert!(repo.get(key).unwrap().is_none());
}

#[test]
fn deleting_referenced_sport_fails_at_database_layer() {
    let seeded = seeded();
    let sports = seeded.catalog.sports();
    let sport_id = sports.get_by_name("Swimming").unwrap().unwrap();

    let err = sports.delete(sport_id).unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert!(sports.get_by_id(sport_id).unwrap().is_some());
}

#[test]
fn event_update_to_dangling_sport_is_left_to_foreign_keys() {
    let seeded = seeded();
    let events = seeded.catalog.events();
    let mut event = events.get_by_id(seeded.event_id).unwrap().unwrap();
    event.sport_id = 404;

    let err = events.update(&event).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(err.is_constraint_violation());
}

#[test]
fn reference_guard_is_available_from_catalog() {
    let seeded = seeded();
    let guard = seeded.catalog.references();

    assert!(guard
        .exists(ReferenceTable::Athlete, seeded.athlete_id)
        .unwrap());
    assert!(!guard.exists(ReferenceTable::Team, seeded.team_id + 1).unwrap());
}
