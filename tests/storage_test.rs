//! League cache persistence against a database file on disk

use fpl_hub::{storage::*, HubError, LeagueId};
use tempfile::TempDir;

fn open_in(dir: &TempDir) -> LeagueDatabase {
    LeagueDatabase::open(&dir.path().join("nested").join("leagues.db")).unwrap()
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let _db = open_in(&dir);
    assert!(dir.path().join("nested").join("leagues.db").exists());
}

#[test]
fn test_leagues_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut db = open_in(&dir);
        let league = NewLeague {
            id: LeagueId::new(738279),
            name: "Office H2H".to_string(),
            total_teams: Some(10),
            average_score: Some(1100.5),
            highest_score: Some(1201),
        };
        db.create_league(&league).unwrap();
    }

    let mut db = open_in(&dir);
    let league = db.get_league(LeagueId::new(738279)).unwrap();
    assert_eq!(league.name, "Office H2H");
    assert_eq!(league.total_teams, Some(10));
    assert_eq!(league.updated_at, Some(league.created_at));
}

#[test]
fn test_backfill_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let created_at = {
        let mut db = open_in(&dir);
        let league = db
            .create_league(&NewLeague::named(LeagueId::new(7), "Backfill"))
            .unwrap();
        assert_eq!(league.updated_at, None);
        db.get_league(LeagueId::new(7)).unwrap().created_at
    };

    let db = open_in(&dir);
    let listed = db.list_leagues().unwrap();
    assert_eq!(listed[0].updated_at, Some(created_at));
}

#[test]
fn test_seed_then_create_conflicts() {
    let dir = TempDir::new().unwrap();
    let mut db = open_in(&dir);
    let league = NewLeague::named(LeagueId::new(1176282), "Seeded");

    assert!(db.seed_league(&league).unwrap().created());
    let err = db.create_league(&league).unwrap_err();
    assert!(matches!(err, HubError::LeagueExists { id: 1176282 }));
}

#[test]
fn test_updates_after_reopen_still_advance() {
    let dir = TempDir::new().unwrap();
    let first = {
        let mut db = open_in(&dir);
        db.create_league(&NewLeague::named(LeagueId::new(3), "Three"))
            .unwrap();
        db.update_league(LeagueId::new(3), &LeagueUpdate::default())
            .unwrap()
    };

    let mut db = open_in(&dir);
    let update = LeagueUpdate {
        total_teams: Some(14),
        ..LeagueUpdate::default()
    };
    let second = db.update_league(LeagueId::new(3), &update).unwrap();

    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.total_teams, Some(14));
    assert_eq!(second.name, "Three");
}
