//! Match orchestration: the turn and win state machine.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::game::board::{Board, Piece};
use crate::game::coordinate::Coordinate;
use crate::game::error::{IllegalMoveReason, MoveError};
use crate::game::recorder::{MatchRecorder, MoveEvent, NullRecorder, RecorderError};
use crate::game::species::{Side, Species};
use crate::game::validator::MoveValidator;

/// Whether the match is still running, and who won if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    /// Moves are still being accepted.
    InProgress,
    /// Terminal state; sticky once reached.
    Ended {
        /// The winning side, or `None` for a draw.
        winner: Option<Side>,
    },
}

/// Complete mutable state of one match.
///
/// Exclusively owned by its [`MatchEngine`]; never shared across matches.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    board: Board,
    current_side: Side,
    move_count: i32,
    status: MatchStatus,
}

impl MatchState {
    /// Fresh state: starting board, side one to move, no moves played.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_side: Side::One,
            move_count: 0,
            status: MatchStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for presentation and test harnesses; legality
    /// is not re-checked here.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The side to move.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> i32 {
        self.move_count
    }

    /// The match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// True once the match reached its terminal state.
    pub fn ended(&self) -> bool {
        matches!(self.status, MatchStatus::Ended { .. })
    }

    /// Moves the piece at `from` to `to`, returning the displaced occupant.
    fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let moving = self.board.remove(from);
        let captured = self.board.remove(to);
        if let Some(piece) = moving {
            self.board.place(to, piece);
        }
        captured
    }

    fn bump_move_count(&mut self) -> i32 {
        self.move_count += 1;
        self.move_count
    }

    fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
    }

    fn flip_side(&mut self) {
        self.current_side = self.current_side.opponent();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one match: validates moves, mutates the board, detects the win,
/// alternates turns, and emits events to the injected recorder.
///
/// Single-threaded and synchronous; exactly one move is in flight at a
/// time, and all recorder I/O happens at move boundaries.
#[derive(Debug)]
pub struct MatchEngine {
    state: MatchState,
    match_id: i32,
    player_one_id: i32,
    player_two_id: i32,
    recorder: Box<dyn MatchRecorder>,
}

impl MatchEngine {
    /// Starts a match between two player ids, registering it with the
    /// recorder.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError`] if the recorder cannot create the match.
    #[instrument(skip(recorder))]
    pub fn new(
        player_one_id: i32,
        player_two_id: i32,
        recorder: Box<dyn MatchRecorder>,
    ) -> Result<Self, RecorderError> {
        let match_id = recorder.create_match(player_one_id, player_two_id)?;
        info!(match_id, player_one_id, player_two_id, "Match created");
        Ok(Self {
            state: MatchState::new(),
            match_id,
            player_one_id,
            player_two_id,
            recorder,
        })
    }

    /// Starts a match with no persistence at all.
    pub fn untracked() -> Self {
        Self {
            state: MatchState::new(),
            match_id: 0,
            player_one_id: 1,
            player_two_id: 2,
            recorder: Box::new(NullRecorder),
        }
    }

    /// The match id assigned by the recorder.
    pub fn match_id(&self) -> i32 {
        self.match_id
    }

    /// Read-only match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable match state, for test harnesses that need a custom position.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Applies one move for the side whose turn it is.
    ///
    /// Input is normalized uppercase notation for both cells. On success
    /// the board is mutated, the move is reported to the recorder, the win
    /// condition is checked, and the turn passes to the other side (unless
    /// the match just ended). On any error nothing changes and the turn
    /// does not advance.
    ///
    /// Recorder failures after the board mutation are logged and do not
    /// fail the move; the engine state is authoritative.
    ///
    /// # Errors
    ///
    /// [`MoveError::MatchEnded`] once the match is over,
    /// [`MoveError::InvalidNotation`] for malformed coordinates, and
    /// [`MoveError::Illegal`] for rule violations.
    #[instrument(skip(self), fields(match_id = self.match_id))]
    pub fn apply_move(&mut self, from_text: &str, to_text: &str) -> Result<MoveEvent, MoveError> {
        if self.state.ended() {
            return Err(MoveError::MatchEnded);
        }

        let from = Coordinate::from_notation(from_text)?;
        let to = Coordinate::from_notation(to_text)?;
        let side = self.state.current_side();

        MoveValidator::new(self.state.board()).validate(from, to, side)?;

        let Some(moving) = self.state.board().piece_at(from) else {
            return Err(MoveError::illegal(IllegalMoveReason::NoPieceAtOrigin));
        };
        let captured = self.state.relocate(from, to);
        let move_number = self.state.bump_move_count();

        let event = MoveEvent::new(
            move_number,
            side,
            from,
            to,
            moving.species(),
            captured.map(|piece| piece.species()),
        );

        if let Err(error) = self
            .recorder
            .record_move(self.match_id, self.player_id(side), &event)
        {
            warn!(%error, move_number, "Failed to record move");
        }

        if let Some(winner) = self.sanctuary_winner() {
            self.state.set_status(MatchStatus::Ended {
                winner: Some(winner),
            });
            info!(winner = %winner, move_count = self.state.move_count(), "Match ended");
            if let Err(error) = self.recorder.finish_match(
                self.match_id,
                Some(self.player_id(winner)),
                self.state.move_count(),
            ) {
                warn!(%error, "Failed to record match result");
            }
        } else {
            self.state.flip_side();
        }

        Ok(event)
    }

    /// Builds a serializable snapshot for presentation layers.
    pub fn snapshot(&self) -> MatchSnapshot {
        let mut cells: Vec<(Coordinate, Piece)> = self.state.board().occupied().collect();
        cells.sort_by_key(|(cell, _)| *cell);

        let notations = |cells: &[Coordinate]| cells.iter().map(Coordinate::notation).collect();

        MatchSnapshot {
            pieces: cells
                .into_iter()
                .map(|(cell, piece)| PieceCell {
                    cell: cell.notation(),
                    species: piece.species(),
                    side: piece.side(),
                })
                .collect(),
            terrain: TerrainSnapshot {
                rivers: notations(Board::river_cells()),
                traps_one: notations(Board::home_traps(Side::One)),
                traps_two: notations(Board::home_traps(Side::Two)),
                sanctuary_one: Board::sanctuary(Side::One).notation(),
                sanctuary_two: Board::sanctuary(Side::Two).notation(),
            },
            current_side: self.state.current_side(),
            move_count: self.state.move_count(),
            status: self.state.status(),
        }
    }

    /// Database id for the given side.
    fn player_id(&self, side: Side) -> i32 {
        match side {
            Side::One => self.player_one_id,
            Side::Two => self.player_two_id,
        }
    }

    /// The side whose piece stands on the opposing sanctuary, if any.
    fn sanctuary_winner(&self) -> Option<Side> {
        self.state
            .board()
            .occupied()
            .find(|(cell, piece)| self.state.board().is_sanctuary(*cell, piece.side()))
            .map(|(_, piece)| piece.side())
    }
}

/// One occupied cell in a [`MatchSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceCell {
    /// Cell notation, e.g. `A1`.
    pub cell: String,
    /// The piece's species.
    pub species: Species,
    /// The owning side.
    pub side: Side,
}

/// The fixed terrain, in notation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerrainSnapshot {
    /// River cells.
    pub rivers: Vec<String>,
    /// Traps around side one's sanctuary (afflicting side two).
    pub traps_one: Vec<String>,
    /// Traps around side two's sanctuary (afflicting side one).
    pub traps_two: Vec<String>,
    /// Side one's sanctuary cell.
    pub sanctuary_one: String,
    /// Side two's sanctuary cell.
    pub sanctuary_two: String,
}

/// Read-only view of a match, sufficient to draw the board with all
/// terrain markers and the turn banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    /// Occupied cells in board order.
    pub pieces: Vec<PieceCell>,
    /// The static terrain.
    pub terrain: TerrainSnapshot,
    /// The side to move.
    pub current_side: Side,
    /// Accepted moves so far.
    pub move_count: i32,
    /// Whether the match has ended.
    pub status: MatchStatus,
}
