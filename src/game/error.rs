//! Error taxonomy for move handling.
//!
//! Every failure here is local and recoverable: the caller reports it and
//! the match state stays untouched. Nothing in the core panics or crosses
//! a match boundary.

use derive_more::{Display, Error};

/// Why the validator rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMoveReason {
    /// A coordinate lies outside the 9x7 board.
    #[display("coordinate is off the board")]
    OutOfBounds,
    /// The origin cell is empty.
    #[display("no piece at the origin cell")]
    NoPieceAtOrigin,
    /// The origin piece belongs to the other side.
    #[display("that piece belongs to the other player")]
    NotYourPiece,
    /// The destination is the mover's own sanctuary.
    #[display("a piece may never enter its own sanctuary")]
    OwnSanctuary,
    /// The destination is not one orthogonal step away (and no river leap
    /// applies).
    #[display("pieces move a single cell horizontally or vertically")]
    NotAdjacent,
    /// The move is diagonal.
    #[display("diagonal moves are not allowed")]
    Diagonal,
    /// The destination holds a friendly piece.
    #[display("you cannot capture your own piece")]
    FriendlyPiece,
    /// The rank rules forbid this capture.
    #[display("that piece cannot capture the target")]
    CannotCapture,
    /// A non-swimmer tried to enter the river.
    #[display("only the rat may enter the water")]
    WaterEntry,
    /// A rat tried to capture while leaving the river.
    #[display("the rat cannot capture while leaving the water")]
    WaterExitCapture,
}

/// A rejected move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Malformed coordinate text.
    #[display("invalid notation '{text}'")]
    InvalidNotation {
        /// The offending input.
        text: String,
    },
    /// The move is against the rules; the board is unchanged and the turn
    /// does not advance.
    #[display("illegal move: {reason}")]
    Illegal {
        /// Which rule rejected it.
        reason: IllegalMoveReason,
    },
    /// A move was attempted after the match reached a terminal state.
    #[display("the match is already over")]
    MatchEnded,
}

impl MoveError {
    /// Shorthand for [`MoveError::InvalidNotation`].
    pub fn invalid_notation(text: impl Into<String>) -> Self {
        Self::InvalidNotation { text: text.into() }
    }

    /// Shorthand for [`MoveError::Illegal`].
    pub const fn illegal(reason: IllegalMoveReason) -> Self {
        Self::Illegal { reason }
    }
}
