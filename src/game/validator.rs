//! Move legality rules.

use tracing::instrument;

use crate::game::board::{Board, Piece};
use crate::game::coordinate::Coordinate;
use crate::game::error::{IllegalMoveReason, MoveError};
use crate::game::species::{Side, Species};

/// Decides move legality against a board snapshot.
///
/// Pure over its inputs: validation never mutates the board. Checks run in
/// a fixed order and stop at the first failure. The own-sanctuary veto
/// comes before the movement pattern so a river leap can never land in the
/// mover's own sanctuary, and the terrain vetoes come after the capture
/// rules so capture legality is assessed before terrain overrides it.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidator<'a> {
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    /// Creates a validator over `board`.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Convenience wrapper around [`MoveValidator::validate`].
    pub fn is_legal(&self, from: Coordinate, to: Coordinate, side: Side) -> bool {
        self.validate(from, to, side).is_ok()
    }

    /// Checks whether `side` may move the piece at `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] naming the first rule the move
    /// violates.
    #[instrument(skip(self))]
    pub fn validate(&self, from: Coordinate, to: Coordinate, side: Side) -> Result<(), MoveError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::illegal(IllegalMoveReason::OutOfBounds));
        }

        let Some(moving) = self.board.piece_at(from) else {
            return Err(MoveError::illegal(IllegalMoveReason::NoPieceAtOrigin));
        };
        if moving.side() != side {
            return Err(MoveError::illegal(IllegalMoveReason::NotYourPiece));
        }

        if self.board.is_own_sanctuary(to, side) {
            return Err(MoveError::illegal(IllegalMoveReason::OwnSanctuary));
        }

        self.check_movement_pattern(from, to, moving)?;

        if let Some(target) = self.board.piece_at(to) {
            self.check_capture(moving, target, to)?;
        }

        self.check_terrain(from, to, moving)
    }

    /// One orthogonal step, or a river leap for the leaping species.
    fn check_movement_pattern(
        &self,
        from: Coordinate,
        to: Coordinate,
        piece: Piece,
    ) -> Result<(), MoveError> {
        if piece.species().can_leap_river() && self.is_river_leap(from, to) {
            return Ok(());
        }

        if !from.is_adjacent(to) {
            return Err(MoveError::illegal(IllegalMoveReason::NotAdjacent));
        }

        // Unreachable when the adjacency check holds (a diagonal step has
        // Manhattan distance 2), kept as an explicit guard on the deltas.
        let row_diff = (to.row() - from.row()).abs();
        let col_diff = (to.col() - from.col()).abs();
        if row_diff == 1 && col_diff == 1 {
            return Err(MoveError::illegal(IllegalMoveReason::Diagonal));
        }

        Ok(())
    }

    /// A straight horizontal or vertical move of more than one cell whose
    /// intervening cells are all river, none of them holding a rat of
    /// either side. A failed leap is not an error by itself; the move
    /// simply falls back to the adjacency requirement.
    fn is_river_leap(&self, from: Coordinate, to: Coordinate) -> bool {
        let row_delta = to.row() - from.row();
        let col_delta = to.col() - from.col();

        let (steps, row_step, col_step) = if row_delta == 0 && col_delta.abs() > 1 {
            (col_delta.abs(), 0, col_delta.signum())
        } else if col_delta == 0 && row_delta.abs() > 1 {
            (row_delta.abs(), row_delta.signum(), 0)
        } else {
            return false;
        };

        for step in 1..steps {
            let cell = Coordinate::new(from.row() + row_step * step, from.col() + col_step * step);
            if !self.board.is_river(cell) {
                return false;
            }
            if let Some(swimmer) = self.board.piece_at(cell)
                && swimmer.species() == Species::Rat
            {
                return false;
            }
        }

        true
    }

    /// Rank comparison with the trap override and the Rat/Elephant
    /// exceptions, via [`Species::can_capture`].
    fn check_capture(&self, attacker: Piece, target: Piece, at: Coordinate) -> Result<(), MoveError> {
        if attacker.side() == target.side() {
            return Err(MoveError::illegal(IllegalMoveReason::FriendlyPiece));
        }

        let target_in_trap = self.board.is_trap(at, target.side());
        if !attacker.species().can_capture(target.species(), target_in_trap) {
            return Err(MoveError::illegal(IllegalMoveReason::CannotCapture));
        }

        Ok(())
    }

    /// Water entry and water-exit capture vetoes.
    fn check_terrain(&self, from: Coordinate, to: Coordinate, piece: Piece) -> Result<(), MoveError> {
        if self.board.is_river(to) && !piece.species().can_swim() {
            return Err(MoveError::illegal(IllegalMoveReason::WaterEntry));
        }

        // A rat emerging from the river onto dry land may not capture; it
        // may still step out onto an empty cell or fight within the water.
        if self.board.is_river(from)
            && piece.species() == Species::Rat
            && !self.board.is_river(to)
            && !self.board.is_empty(to)
        {
            return Err(MoveError::illegal(IllegalMoveReason::WaterExitCapture));
        }

        Ok(())
    }
}
