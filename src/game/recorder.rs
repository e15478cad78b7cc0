//! Persistence collaborator contract for match events.
//!
//! The engine emits move and result events to a [`MatchRecorder`] injected
//! at construction. Recording is advisory: once a board mutation has been
//! applied it is the source of truth, and a recorder failure is logged by
//! the engine rather than rolled back.

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use crate::game::coordinate::Coordinate;
use crate::game::species::{Side, Species};

/// An accepted move, as reported to the recorder and to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveEvent {
    /// 1-based move number within the match.
    move_number: i32,
    /// The side that moved.
    side: Side,
    /// Origin cell.
    from: Coordinate,
    /// Destination cell.
    to: Coordinate,
    /// Species of the moved piece.
    moved: Species,
    /// Species of the captured piece, if the move was a capture.
    captured: Option<Species>,
}

/// Error from a match recorder.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Recorder error: {} at {}:{}", message, file, line)]
pub struct RecorderError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl RecorderError {
    /// Creates a new recorder error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Consumer of match lifecycle events.
///
/// Implementations are injected into [`MatchEngine`] at construction, so
/// concurrent matches can share a recorder or run with independent ones.
/// All calls happen synchronously at move boundaries.
///
/// [`MatchEngine`]: crate::game::engine::MatchEngine
pub trait MatchRecorder: std::fmt::Debug {
    /// Registers a new match between two player ids and returns the match id.
    fn create_match(&self, player_one_id: i32, player_two_id: i32) -> Result<i32, RecorderError>;

    /// Records one accepted move made by `player_id`.
    fn record_move(
        &self,
        match_id: i32,
        player_id: i32,
        event: &MoveEvent,
    ) -> Result<(), RecorderError>;

    /// Records the terminal result. `winner_id` is `None` on a draw.
    fn finish_match(
        &self,
        match_id: i32,
        winner_id: Option<i32>,
        move_count: i32,
    ) -> Result<(), RecorderError>;
}

/// Recorder that drops every event; used for untracked matches and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl MatchRecorder for NullRecorder {
    fn create_match(&self, _player_one_id: i32, _player_two_id: i32) -> Result<i32, RecorderError> {
        Ok(0)
    }

    fn record_move(
        &self,
        _match_id: i32,
        _player_id: i32,
        _event: &MoveEvent,
    ) -> Result<(), RecorderError> {
        Ok(())
    }

    fn finish_match(
        &self,
        _match_id: i32,
        _winner_id: Option<i32>,
        _move_count: i32,
    ) -> Result<(), RecorderError> {
        Ok(())
    }
}
