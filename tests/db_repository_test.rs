//! Tests for the match-history repository.

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use xoudouqi::{MatchEngine, MatchRepository, NewMoveRecord};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, MatchRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let repo = MatchRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

#[test]
fn test_create_player() {
    let (_db, repo) = setup_test_db();
    let player = repo
        .create_player("Alice".to_string())
        .expect("Create failed");
    assert_eq!(player.display_name(), "Alice");
    assert!(*player.id() > 0);
}

#[test]
fn test_create_player_duplicate_name_fails() {
    let (_db, repo) = setup_test_db();
    repo.create_player("Bob".to_string())
        .expect("First create failed");
    let result = repo.create_player("Bob".to_string());
    assert!(result.is_err(), "Duplicate name should fail");
}

#[test]
fn test_get_player_by_name() {
    let (_db, repo) = setup_test_db();
    repo.create_player("Carol".to_string())
        .expect("Create failed");

    let found = repo.get_player_by_name("Carol").expect("Query failed");
    assert!(found.is_some());
    assert_eq!(found.unwrap().display_name(), "Carol");

    let missing = repo.get_player_by_name("NoSuchPlayer").expect("Query failed");
    assert!(missing.is_none());
}

#[test]
fn test_get_or_create_player_is_idempotent() {
    let (_db, repo) = setup_test_db();
    let first = repo.get_or_create_player("Dave").expect("Create failed");
    let second = repo.get_or_create_player("Dave").expect("Lookup failed");
    assert_eq!(first.id(), second.id());
    assert_eq!(repo.list_players().expect("List failed").len(), 1);
}

#[test]
fn test_list_players_ordered_by_creation() {
    let (_db, repo) = setup_test_db();
    for name in ["Alpha", "Beta", "Gamma"] {
        repo.create_player(name.to_string()).expect("Create failed");
    }

    let players = repo.list_players().expect("List failed");
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].display_name(), "Alpha");
    assert_eq!(players[1].display_name(), "Beta");
    assert_eq!(players[2].display_name(), "Gamma");
}

#[test]
fn test_create_match_starts_unfinished() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Eve").expect("Create failed");
    let two = repo.get_or_create_player("Frank").expect("Create failed");

    let record = repo
        .create_match(*one.id(), *two.id())
        .expect("Create match failed");

    assert_eq!(record.player_one_id(), one.id());
    assert_eq!(record.player_two_id(), two.id());
    assert!(record.winner_id().is_none());
    assert_eq!(*record.moves_count(), 0);
    assert!(!record.finished());
}

#[test]
fn test_record_and_list_moves_in_order() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Grace").expect("Create failed");
    let two = repo.get_or_create_player("Heidi").expect("Create failed");
    let record = repo
        .create_match(*one.id(), *two.id())
        .expect("Create match failed");

    let moves = [
        (*one.id(), 1, "A3", "A4", "R1", None),
        (*two.id(), 2, "G7", "G6", "R2", None),
        (*one.id(), 3, "A4", "A5", "R1", Some("C2".to_string())),
    ];
    for (player_id, number, from, to, piece, captured) in moves {
        repo.record_move(NewMoveRecord::new(
            *record.id(),
            player_id,
            number,
            from.to_string(),
            to.to_string(),
            piece.to_string(),
            captured,
        ))
        .expect("Record move failed");
    }

    let stored = repo.moves_for_match(*record.id()).expect("Load failed");
    assert_eq!(stored.len(), 3);
    assert_eq!(*stored[0].move_number(), 1);
    assert_eq!(stored[0].from_cell(), "A3");
    assert_eq!(*stored[2].move_number(), 3);
    assert_eq!(stored[2].piece_captured().as_deref(), Some("C2"));
}

#[test]
fn test_finish_match_records_the_result() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Ivan").expect("Create failed");
    let two = repo.get_or_create_player("Judy").expect("Create failed");
    let record = repo
        .create_match(*one.id(), *two.id())
        .expect("Create match failed");

    repo.finish_match(*record.id(), Some(*one.id()), 24)
        .expect("Finish failed");

    let matches = repo.recent_matches(*one.id(), 10).expect("Load failed");
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0].winner_id(), Some(*one.id()));
    assert_eq!(*matches[0].moves_count(), 24);
    assert!(matches[0].finished());
}

#[test]
fn test_finish_unknown_match_fails() {
    let (_db, repo) = setup_test_db();
    let result = repo.finish_match(999, None, 0);
    assert!(result.is_err());
}

#[test]
fn test_recent_matches_filters_and_limits() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Karl").expect("Create failed");
    let two = repo.get_or_create_player("Lena").expect("Create failed");
    let other = repo.get_or_create_player("Mara").expect("Create failed");

    for _ in 0..3 {
        repo.create_match(*one.id(), *two.id())
            .expect("Create match failed");
    }
    repo.create_match(*two.id(), *other.id())
        .expect("Create match failed");

    let for_one = repo.recent_matches(*one.id(), 10).expect("Load failed");
    assert_eq!(for_one.len(), 3);

    let limited = repo.recent_matches(*two.id(), 2).expect("Load failed");
    assert_eq!(limited.len(), 2);
}

#[test]
fn test_standing_counts_only_finished_matches() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Nina").expect("Create failed");
    let two = repo.get_or_create_player("Omar").expect("Create failed");

    // Two wins, one loss, one draw, one abandoned (never finished).
    for winner in [Some(*one.id()), Some(*one.id()), Some(*two.id()), None] {
        let record = repo
            .create_match(*one.id(), *two.id())
            .expect("Create match failed");
        repo.finish_match(*record.id(), winner, 12)
            .expect("Finish failed");
    }
    repo.create_match(*one.id(), *two.id())
        .expect("Create match failed");

    let standing = repo.standing(*one.id()).expect("Standing failed");
    assert_eq!(*standing.total_matches(), 4);
    assert_eq!(*standing.wins(), 2);
    assert_eq!(*standing.losses(), 1);
    assert_eq!(*standing.draws(), 1);
    assert!((standing.win_rate() - 50.0).abs() < 0.001);
}

#[test]
fn test_standing_with_no_matches() {
    let (_db, repo) = setup_test_db();
    let player = repo.get_or_create_player("Pia").expect("Create failed");

    let standing = repo.standing(*player.id()).expect("Standing failed");
    assert_eq!(*standing.total_matches(), 0);
    assert_eq!(standing.win_rate(), 0.0);
}

#[test]
fn test_engine_writes_through_the_repository() {
    let (_db, repo) = setup_test_db();
    let one = repo.get_or_create_player("Quinn").expect("Create failed");
    let two = repo.get_or_create_player("Rosa").expect("Create failed");

    let mut engine = MatchEngine::new(*one.id(), *two.id(), Box::new(repo.clone()))
        .expect("Engine creation failed");

    engine.apply_move("A3", "A4").expect("Move failed");
    engine.apply_move("G7", "G6").expect("Move failed");

    let stored = repo.moves_for_match(engine.match_id()).expect("Load failed");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].player_id(), one.id());
    assert_eq!(stored[0].piece_moved(), "R1");
    assert_eq!(stored[1].player_id(), two.id());
    assert_eq!(stored[1].from_cell(), "G7");
}
