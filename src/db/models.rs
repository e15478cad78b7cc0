//! Database models for players, matches, and recorded moves.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// Player profile database model.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::players)]
pub struct Player {
    id: i32,
    display_name: String,
    created_at: NaiveDateTime,
}

/// Insertable player model for creating new profiles.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::players)]
pub struct NewPlayer {
    display_name: String,
}

/// One match between two players.
///
/// `ended_at` is `NULL` while the match is running or was abandoned;
/// a finished match with a `NULL` `winner_id` is a draw.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::matches)]
pub struct MatchRecord {
    id: i32,
    player_one_id: i32,
    player_two_id: i32,
    winner_id: Option<i32>,
    moves_count: i32,
    started_at: NaiveDateTime,
    ended_at: Option<NaiveDateTime>,
}

impl MatchRecord {
    /// True once the result has been recorded.
    pub fn finished(&self) -> bool {
        self.ended_at.is_some()
    }
}

/// Insertable match model.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::matches)]
pub struct NewMatchRecord {
    player_one_id: i32,
    player_two_id: i32,
}

/// One recorded move within a match.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::match_moves)]
pub struct MoveRecord {
    id: i32,
    match_id: i32,
    player_id: i32,
    move_number: i32,
    from_cell: String,
    to_cell: String,
    piece_moved: String,
    piece_captured: Option<String>,
    played_at: NaiveDateTime,
}

/// Insertable move model.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::match_moves)]
pub struct NewMoveRecord {
    match_id: i32,
    player_id: i32,
    move_number: i32,
    from_cell: String,
    to_cell: String,
    piece_moved: String,
    piece_captured: Option<String>,
}

/// Aggregated standing for one player over finished matches.
#[derive(Debug, Clone, Getters, new)]
pub struct PlayerStanding {
    total_matches: i32,
    wins: i32,
    losses: i32,
    draws: i32,
}

impl PlayerStanding {
    /// Win rate as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        if self.total_matches == 0 {
            0.0
        } else {
            (self.wins as f64 / self.total_matches as f64) * 100.0
        }
    }
}
